//! Admin gate: one shared static credential.

mod none;
mod password;
mod session;
mod traits;
mod types;

pub use none::*;
pub use password::*;
pub use session::*;
pub use traits::*;
pub use types::*;

use crate::config::AuthConfig;

/// Factory function to create authenticator from config
pub fn create_authenticator(config: &AuthConfig) -> Result<Box<dyn Authenticator>, AuthError> {
    use crate::config::AuthMethod;

    match config.method {
        AuthMethod::None => Ok(Box::new(NoneAuthenticator::new())),
        AuthMethod::Password => {
            let password = config.password.clone().ok_or_else(|| {
                AuthError::ConfigurationError(
                    "password must be set when using the password auth method".to_string(),
                )
            })?;
            Ok(Box::new(SharedPasswordAuthenticator::new(password)))
        }
    }
}
