use super::{
    types::{AuthMethod, Config},
    ConfigError,
};

/// Validate configuration
/// Currently validates:
/// - Auth section exists (enforced by serde)
/// - Password is set when the password method is chosen
/// - Server port is not 0
/// - Storage key is not empty
/// - Seed timeout is not 0
/// - Contact phone is digits only and the template names the product
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.auth.method == AuthMethod::Password
        && config.auth.password.as_deref().is_none_or(str::is_empty)
    {
        return Err(ConfigError::ValidationError(
            "auth.password must be set when auth.method is \"password\"".to_string(),
        ));
    }

    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.storage.key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "storage.key cannot be empty".to_string(),
        ));
    }

    if config.seed.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "seed.timeout_secs cannot be 0".to_string(),
        ));
    }

    if let Some(phone) = &config.contact.phone {
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::ValidationError(format!(
                "contact.phone must contain only digits, got {:?}",
                phone
            )));
        }
    }

    if !config.contact.message_template.contains("{title}") {
        return Err(ConfigError::ValidationError(
            "contact.message_template must contain {title}".to_string(),
        ));
    }

    Ok(())
}
