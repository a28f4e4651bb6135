//! Shared admin password check.

use async_trait::async_trait;

use super::{AuthError, AuthRequest, Authenticator, Identity};

/// Header carrying the admin password.
pub const PASSWORD_HEADER: &str = "x-admin-password";

/// Authenticator that compares requests against the single shared admin
/// password.
///
/// Accepts the password in either:
/// - `X-Admin-Password: <password>` header
/// - `Authorization: Bearer <password>` header
pub struct SharedPasswordAuthenticator {
    expected: String,
}

impl SharedPasswordAuthenticator {
    pub fn new(password: String) -> Self {
        Self { expected: password }
    }

    fn check(&self, password: &str) -> Result<Identity, AuthError> {
        if constant_time_eq(password.as_bytes(), self.expected.as_bytes()) {
            Ok(Identity::admin())
        } else {
            Err(AuthError::InvalidCredentials("Incorrect password".to_string()))
        }
    }

    fn extract_password<'a>(&self, request: &'a AuthRequest) -> Option<&'a str> {
        if let Some(password) = request.headers.get(PASSWORD_HEADER) {
            return Some(password.as_str());
        }

        let auth_header = request.headers.get("authorization")?;
        auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
    }
}

#[async_trait]
impl Authenticator for SharedPasswordAuthenticator {
    async fn authenticate(&self, request: &AuthRequest) -> Result<Identity, AuthError> {
        let password = self
            .extract_password(request)
            .ok_or(AuthError::NotAuthenticated)?;
        self.check(password)
    }

    fn method_name(&self) -> &'static str {
        "password"
    }
}

/// Constant-time byte comparison.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
