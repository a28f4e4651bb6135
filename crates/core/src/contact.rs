//! Outbound contact link construction for the product detail view.

use serde::Serialize;

use crate::product::Product;

/// Default message sent with a contact link.
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "Hola, estoy interesado en el producto: {title} ({price})";

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// A message-prefilled link to the seller's messaging account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub url: String,
    pub message: String,
}

impl ContactLink {
    /// Build the link for `product`. `{title}` and `{price}` in the template
    /// are replaced with the product's values.
    pub fn for_product(phone: &str, template: &str, product: &Product) -> Self {
        let message = render_message(template, product);
        let url = format!(
            "{}/{}?text={}",
            WHATSAPP_BASE_URL,
            phone,
            urlencoding::encode(&message)
        );
        Self { url, message }
    }
}

/// Seller contact details used to build links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSettings {
    /// Destination number, digits only. `None` disables contact links.
    pub phone: Option<String>,
    pub message_template: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            phone: None,
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
        }
    }
}

impl ContactSettings {
    /// Settings for `phone` with the default message.
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Self::default()
        }
    }

    pub fn link_for(&self, product: &Product) -> Option<ContactLink> {
        self.phone
            .as_deref()
            .map(|phone| ContactLink::for_product(phone, &self.message_template, product))
    }
}

fn render_message(template: &str, product: &Product) -> String {
    template
        .replace("{title}", &product.title)
        .replace("{price}", &product.price)
}
