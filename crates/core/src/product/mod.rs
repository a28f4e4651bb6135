//! Product data model and the id-unique catalog list.

mod catalog;
mod types;

pub use catalog::Catalog;
pub use types::*;
