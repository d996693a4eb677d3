//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single source of truth for the access token and
//! display name. The app constructs one at startup, provides it through
//! context, and the route guard and API helpers read it from there.
//!
//! DESIGN
//! ======
//! Memory is authoritative and storage is a mirror: every mutation writes
//! through immediately, and storage is only read back by `initialize`.
//! Storage failures are logged and swallowed so mutations never fail.
//! The outbound `Authorization` value is held here and read by the request
//! builder rather than pushed into a shared HTTP client. `initialize` sets it
//! only for a non-empty token; `establish` always sets it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::SessionConfig;
use crate::util::storage::{KeyValueStorage, LocalStorage};

/// Current authentication token and display name.
///
/// Both fields are always present. An empty token means unauthenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub display_name: String,
}

impl Session {
    /// Any non-empty token counts as authenticated; it is never parsed.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Format a bearer credential for the `Authorization` header.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Session state mirrored into persistent key-value storage.
#[derive(Clone, Debug)]
pub struct SessionStore<S = LocalStorage> {
    session: Session,
    authorization: Option<String>,
    storage: S,
    config: SessionConfig,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Restore the session from `storage`.
    ///
    /// A missing token reads as empty. A missing or empty display name reads
    /// as the configured default.
    pub fn initialize(storage: S, config: SessionConfig) -> Self {
        let token = read_entry(&storage, &config.token_key).unwrap_or_default();
        let display_name = read_entry(&storage, &config.name_key)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| config.default_display_name.clone());

        let session = Session { token, display_name };
        let authorization = session.is_authenticated().then(|| bearer(&session.token));
        log::debug!("session restored: authenticated={}", session.is_authenticated());
        Self { session, authorization, storage, config }
    }

    /// Record a token obtained from a successful login.
    ///
    /// `display_name` falls back to the configured default when absent or
    /// empty. An empty `token` is accepted and leaves the session
    /// unauthenticated, though the header still becomes `Bearer `.
    pub fn establish(&mut self, token: &str, display_name: Option<&str>) {
        let display_name = display_name
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.config.default_display_name)
            .to_owned();

        self.session = Session { token: token.to_owned(), display_name };
        self.authorization = Some(bearer(token));
        write_entry(&self.storage, &self.config.token_key, &self.session.token);
        write_entry(&self.storage, &self.config.name_key, &self.session.display_name);
        log::debug!("session established for {}", self.session.display_name);
    }

    /// Forget the session and delete both storage entries. Idempotent.
    pub fn clear(&mut self) {
        self.session = Session::default();
        self.authorization = None;
        remove_entry(&self.storage, &self.config.token_key);
        remove_entry(&self.storage, &self.config.name_key);
        log::debug!("session cleared");
    }
}

impl<S> SessionStore<S> {
    #[must_use]
    pub fn token(&self) -> &str {
        &self.session.token
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.session.display_name
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.session.clone()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Value for the outbound `Authorization` header, if one is set.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.authorization.clone()
    }
}

fn read_entry<S: KeyValueStorage>(storage: &S, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("session storage read failed for {key}: {e}");
            None
        }
    }
}

fn write_entry<S: KeyValueStorage>(storage: &S, key: &str, value: &str) {
    if let Err(e) = storage.set(key, value) {
        log::warn!("session storage write failed for {key}: {e}");
    }
}

fn remove_entry<S: KeyValueStorage>(storage: &S, key: &str) {
    if let Err(e) = storage.remove(key) {
        log::warn!("session storage remove failed for {key}: {e}");
    }
}
