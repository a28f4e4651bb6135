//! The admin editor: create, update and delete under the id-uniqueness
//! invariant, writing the full list back after every mutation.

use std::sync::Arc;

use tracing::{info, warn};

use super::{
    search, AdminError, ConfirmGate, DeleteOutcome, EditorMode, ProductForm, SubmitAction,
    Submitted, DELETE_CONFIRMATION_PROMPT,
};
use crate::metrics::CATALOG_MUTATIONS;
use crate::notice::Notice;
use crate::product::{Catalog, Product};
use crate::store::{CatalogStore, Frontend};

/// Admin session over an owned copy of the catalog.
pub struct AdminEditor {
    store: Arc<CatalogStore>,
    catalog: Catalog,
    mode: EditorMode,
    form: ProductForm,
}

impl AdminEditor {
    /// Load the catalog through the admin fallback chain and start in add
    /// mode. Returns any notices produced while loading.
    pub async fn open(store: Arc<CatalogStore>) -> (Self, Vec<Notice>) {
        let loaded = store.load(Frontend::Admin).await;
        (Self::with_catalog(store, loaded.catalog), loaded.notices)
    }

    /// Start an editor over an already loaded catalog.
    pub fn with_catalog(store: Arc<CatalogStore>, catalog: Catalog) -> Self {
        Self {
            store,
            catalog,
            mode: EditorMode::Add,
            form: ProductForm::blank(),
        }
    }

    pub fn products(&self) -> &Catalog {
        &self.catalog
    }

    pub fn product(&self, id: u64) -> Option<&Product> {
        self.catalog.get(id)
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// The working form.
    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    /// Switch to editing `id`, loading its fields into the form.
    pub fn begin_edit(&mut self, id: u64) -> Result<&ProductForm, AdminError> {
        let product = self.catalog.get(id).ok_or(AdminError::NotFound(id))?;
        self.form = ProductForm::from_product(product);
        self.mode = EditorMode::Editing { id };
        Ok(&self.form)
    }

    /// Back to add mode with a blank form.
    pub fn reset(&mut self) {
        self.mode = EditorMode::Add;
        self.form = ProductForm::blank();
    }

    /// Submit the form: create in add mode, replace in edit mode.
    ///
    /// The submitted values become the working form first, so a rejected
    /// submit keeps what the user typed. On success the catalog is persisted
    /// and the editor returns to add mode.
    pub fn submit(&mut self, form: ProductForm) -> Result<Submitted, AdminError> {
        self.form = form;
        let fields = self.form.validate()?;

        let (action, product) = match self.mode {
            EditorMode::Add => match self.catalog.create(fields) {
                Ok(product) => (SubmitAction::Created, product.clone()),
                Err(e) => {
                    CATALOG_MUTATIONS
                        .with_label_values(&["create", "id_exhausted"])
                        .inc();
                    warn!("Cannot create product: {}", e);
                    return Err(AdminError::IdSpaceExhausted);
                }
            },
            EditorMode::Editing { id } => match self.catalog.update(id, fields) {
                Ok(product) => (SubmitAction::Updated, product.clone()),
                Err(_) => {
                    CATALOG_MUTATIONS
                        .with_label_values(&["update", "not_found"])
                        .inc();
                    warn!("Product {} vanished while being edited", id);
                    return Err(AdminError::NotFound(id));
                }
            },
        };

        CATALOG_MUTATIONS
            .with_label_values(&[action.as_str(), "ok"])
            .inc();
        info!("Product {} {}d", product.id, action.as_str());

        let mut notices = vec![Notice::info(match action {
            SubmitAction::Created => "Product added",
            SubmitAction::Updated => "Product updated",
        })];
        notices.extend(self.persist());
        self.reset();

        Ok(Submitted {
            action,
            product,
            notices,
        })
    }

    /// Delete `id` after asking `gate`. Declining changes nothing; the editor
    /// stays in whatever mode it was in either way.
    pub fn delete(&mut self, id: u64, gate: &dyn ConfirmGate) -> Result<DeleteOutcome, AdminError> {
        if !gate.confirm(DELETE_CONFIRMATION_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let product = self.catalog.remove(id).map_err(|_| {
            CATALOG_MUTATIONS
                .with_label_values(&["delete", "not_found"])
                .inc();
            AdminError::NotFound(id)
        })?;

        CATALOG_MUTATIONS.with_label_values(&["delete", "ok"]).inc();
        info!("Product {} deleted", id);

        let mut notices = vec![Notice::info("Product deleted")];
        notices.extend(self.persist());

        Ok(DeleteOutcome::Deleted { product, notices })
    }

    /// Read-only search over the working catalog.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        search::search(&self.catalog, term)
    }

    /// Write the full catalog back. A rejected write becomes a notice; the
    /// in-memory catalog stays as it is.
    fn persist(&self) -> Option<Notice> {
        self.store
            .save(&self.catalog)
            .err()
            .map(|e| Notice::error(format!("Could not save products: {}", e)))
    }
}
