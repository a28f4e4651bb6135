use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use storefront_core::{
    AdminEditor, Authenticator, CatalogStore, Config, ContactSettings, SanitizedConfig,
    SessionRegistry,
};
use tokio::sync::Mutex;

/// Shared application state
pub struct AppState {
    config: Config,
    authenticator: Arc<dyn Authenticator>,
    /// Catalog store shared by both front-ends
    store: Arc<CatalogStore>,
    /// The single admin session; commands run one at a time
    editor: Arc<Mutex<AdminEditor>>,
    /// Tokens issued by admin login
    sessions: SessionRegistry,
    contact: ContactSettings,
}

impl AppState {
    pub fn new(
        config: Config,
        authenticator: Arc<dyn Authenticator>,
        store: Arc<CatalogStore>,
        editor: AdminEditor,
    ) -> Self {
        let contact = ContactSettings::from(&config.contact);
        Self {
            config,
            authenticator,
            store,
            editor: Arc::new(Mutex::new(editor)),
            sessions: SessionRegistry::new(),
            contact,
        }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    pub fn store(&self) -> &CatalogStore {
        self.store.as_ref()
    }

    pub fn editor(&self) -> &Arc<Mutex<AdminEditor>> {
        &self.editor
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn contact(&self) -> &ContactSettings {
        &self.contact
    }

    /// Directory served as the static site.
    pub fn static_dir(&self) -> &Path {
        &self.config.server.static_dir
    }

    /// How long clients should show a notice.
    pub fn notice_display(&self) -> Duration {
        Duration::from_secs(self.config.notices.display_secs)
    }
}
