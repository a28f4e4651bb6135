use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::contact::{ContactSettings, DEFAULT_MESSAGE_TEMPLATE};
use crate::store::DEFAULT_STORAGE_KEY;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub auth: AuthConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub notices: NoticeConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served as the static site (pages, images, seed file).
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("site")
}

/// Admin gate configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub method: AuthMethod,
    /// Shared admin password (required when method = "password")
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    None,
    Password,
}

/// Persistence configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Database file for the sqlite backend
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    /// Name of the slot holding the catalog
    #[serde(default = "default_storage_key")]
    pub key: String,
    /// Total byte cap across all slots (unlimited if unset)
    #[serde(default)]
    pub quota_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
            key: default_storage_key(),
            quota_bytes: None,
        }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("storefront.db")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Available storage backends
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Memory,
}

/// Seed resource configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Local seed file (used unless `url` is set)
    #[serde(default = "default_seed_path")]
    pub path: PathBuf,
    /// Remote seed resource
    #[serde(default)]
    pub url: Option<String>,
    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_seed_timeout")]
    pub timeout_secs: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            path: default_seed_path(),
            url: None,
            timeout_secs: default_seed_timeout(),
        }
    }
}

fn default_seed_path() -> PathBuf {
    PathBuf::from("site/products.json")
}

fn default_seed_timeout() -> u32 {
    10
}

/// Outbound contact link configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactConfig {
    /// Messaging number, digits only
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_message_template")]
    pub message_template: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: None,
            message_template: default_message_template(),
        }
    }
}

impl From<&ContactConfig> for ContactSettings {
    fn from(config: &ContactConfig) -> Self {
        Self {
            phone: config.phone.clone(),
            message_template: config.message_template.clone(),
        }
    }
}

fn default_message_template() -> String {
    DEFAULT_MESSAGE_TEMPLATE.to_string()
}

/// Notice display configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NoticeConfig {
    #[serde(default = "default_display_secs")]
    pub display_secs: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            display_secs: default_display_secs(),
        }
    }
}

fn default_display_secs() -> u64 {
    3
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub auth: SanitizedAuthConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub seed: SeedConfig,
    pub contact: ContactConfig,
    pub notices: NoticeConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedAuthConfig {
    pub method: String,
    pub password_configured: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            auth: SanitizedAuthConfig {
                method: match config.auth.method {
                    AuthMethod::None => "none".to_string(),
                    AuthMethod::Password => "password".to_string(),
                },
                password_configured: config
                    .auth
                    .password
                    .as_ref()
                    .is_some_and(|p| !p.is_empty()),
            },
            server: config.server.clone(),
            storage: config.storage.clone(),
            seed: config.seed.clone(),
            contact: config.contact.clone(),
            notices: config.notices.clone(),
        }
    }
}
