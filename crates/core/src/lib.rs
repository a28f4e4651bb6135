pub mod admin;
pub mod auth;
pub mod browse;
pub mod config;
pub mod contact;
pub mod metrics;
pub mod notice;
pub mod product;
pub mod store;
pub mod testing;

pub use admin::{
    AdminEditor, AdminError, ConfirmGate, DeleteOutcome, EditorMode, ProductForm, SubmitAction,
    Submitted, ValidationError,
};
pub use auth::{
    create_authenticator, AuthError, AuthRequest, Authenticator, Identity, NoneAuthenticator,
    SessionRegistry, SharedPasswordAuthenticator, PASSWORD_HEADER, SESSION_HEADER,
};
pub use browse::{
    BrowseError, BrowseQuery, BrowseSession, BrowseView, CategorySelection, CategoryToken,
    ProductDetail,
};
pub use config::{
    load_config, load_config_from_str, validate_config, AuthConfig, AuthMethod, Config,
    ConfigError, SanitizedConfig, StorageBackend,
};
pub use contact::{ContactLink, ContactSettings};
pub use notice::{Notice, NoticeLevel};
pub use product::{Catalog, CatalogError, Category, Product, ProductCategory, ProductFields};
pub use store::{
    CatalogSource, CatalogStore, CatalogStoreError, FileSeedSource, Frontend, HttpSeedSource,
    KeyValueStore, LoadedCatalog, MemoryKeyValueStore, SeedError, SeedSource,
    SqliteKeyValueStore, StorageError,
};
