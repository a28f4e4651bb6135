//! Logged-in admin sessions.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use super::Identity;

/// Header carrying a session token issued by login.
pub const SESSION_HEADER: &str = "x-admin-session";

/// Server-side session flags: a token is valid from login until logout.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, Identity>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `identity` and return its token.
    pub fn open(&self, identity: Identity) -> String {
        let token = Uuid::new_v4().to_string();
        self.lock().insert(token.clone(), identity);
        token
    }

    /// Identity behind a live token.
    pub fn get(&self, token: &str) -> Option<Identity> {
        self.lock().get(token).cloned()
    }

    /// End a session. Returns whether the token was live.
    pub fn close(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Identity>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
