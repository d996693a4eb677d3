use super::*;
use crate::util::storage::{MemoryStorage, StorageError};

fn store_over(storage: &MemoryStorage) -> SessionStore<MemoryStorage> {
    SessionStore::initialize(storage.clone(), SessionConfig::default())
}

/// Backend that rejects every operation.
struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend("QuotaExceededError".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_default_is_unauthenticated() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.display_name, "");
}

#[test]
fn session_any_non_empty_token_is_authenticated() {
    for token in ["x", " ", "not-a-jwt", "expired.token.value"] {
        let session = Session { token: token.to_owned(), display_name: String::new() };
        assert!(session.is_authenticated(), "token {token:?}");
    }
}

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_empty_storage_defaults() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);
    assert_eq!(store.token(), "");
    assert_eq!(store.display_name(), "admin");
    assert!(!store.is_authenticated());
    assert_eq!(store.authorization(), None);
}

#[test]
fn initialize_does_not_write_storage() {
    let storage = MemoryStorage::new();
    let _store = store_over(&storage);
    assert!(storage.is_empty());
}

#[test]
fn initialize_reads_stored_values() {
    let storage = MemoryStorage::new();
    storage.set("gp_token", "tok").unwrap();
    storage.set("gp_user", "bob").unwrap();
    let store = store_over(&storage);
    assert_eq!(store.token(), "tok");
    assert_eq!(store.display_name(), "bob");
    assert_eq!(store.authorization(), Some("Bearer tok".to_owned()));
}

#[test]
fn initialize_empty_stored_name_falls_back_to_default() {
    let storage = MemoryStorage::new();
    storage.set("gp_user", "").unwrap();
    let store = store_over(&storage);
    assert_eq!(store.display_name(), "admin");
}

#[test]
fn initialize_honors_configured_keys() {
    let storage = MemoryStorage::new();
    storage.set("custom_token", "tok").unwrap();
    storage.set("gp_token", "ignored").unwrap();
    let config = SessionConfig { token_key: "custom_token".to_owned(), ..SessionConfig::default() };
    let store = SessionStore::initialize(storage, config);
    assert_eq!(store.token(), "tok");
}

#[test]
fn initialize_after_establish_restores_session() {
    let storage = MemoryStorage::new();
    let mut first = store_over(&storage);
    first.establish("t-42", Some("carol"));
    drop(first);

    let restored = store_over(&storage);
    assert_eq!(restored.token(), "t-42");
    assert_eq!(restored.display_name(), "carol");
    assert_eq!(restored.authorization(), Some("Bearer t-42".to_owned()));
}

// =============================================================
// establish
// =============================================================

#[test]
fn establish_sets_state_and_storage() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.establish("abc123", Some("alice"));

    assert_eq!(store.session(), Session { token: "abc123".to_owned(), display_name: "alice".to_owned() });
    assert_eq!(storage.get("gp_token"), Ok(Some("abc123".to_owned())));
    assert_eq!(storage.get("gp_user"), Ok(Some("alice".to_owned())));
    assert_eq!(store.authorization(), Some("Bearer abc123".to_owned()));
}

#[test]
fn establish_without_name_uses_admin() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.establish("abc", None);
    assert_eq!(store.display_name(), "admin");
    assert_eq!(storage.get("gp_user"), Ok(Some("admin".to_owned())));
}

#[test]
fn establish_with_empty_name_uses_admin() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.establish("abc", Some(""));
    assert_eq!(store.display_name(), "admin");
}

#[test]
fn establish_with_empty_token_is_unauthenticated() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.establish("", Some("alice"));
    assert!(!store.is_authenticated());
    assert_eq!(store.authorization(), Some("Bearer ".to_owned()));
    assert_eq!(storage.get("gp_token"), Ok(Some(String::new())));
}

#[test]
fn establish_empty_token_then_reload_has_no_authorization() {
    let storage = MemoryStorage::new();
    store_over(&storage).establish("", None);
    let reloaded = store_over(&storage);
    assert_eq!(reloaded.authorization(), None);
}

#[test]
fn clear_after_empty_token_establish_drops_authorization() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.establish("", None);
    store.clear();
    assert_eq!(store.authorization(), None);
}

#[test]
fn establish_replaces_previous_session() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.establish("first", Some("alice"));
    store.establish("second", None);
    assert_eq!(store.token(), "second");
    assert_eq!(store.display_name(), "admin");
    assert_eq!(storage.get("gp_token"), Ok(Some("second".to_owned())));
}

// =============================================================
// clear
// =============================================================

#[test]
fn clear_resets_state_and_removes_keys() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.establish("abc", Some("alice"));
    store.clear();

    assert_eq!(store.token(), "");
    assert_eq!(store.display_name(), "");
    assert_eq!(store.authorization(), None);
    assert!(!storage.contains("gp_token"));
    assert!(!storage.contains("gp_user"));
}

#[test]
fn clear_twice_matches_clear_once() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.establish("abc", Some("alice"));
    store.clear();
    let once = store.session();
    let once_len = storage.len();
    store.clear();
    assert_eq!(store.session(), once);
    assert_eq!(storage.len(), once_len);
}

#[test]
fn clear_on_fresh_store_is_harmless() {
    let storage = MemoryStorage::new();
    let mut store = store_over(&storage);
    store.clear();
    assert_eq!(store.session(), Session::default());
}

#[test]
fn clear_leaves_unrelated_keys() {
    let storage = MemoryStorage::new();
    storage.set("gp_theme", "true").unwrap();
    let mut store = store_over(&storage);
    store.establish("abc", None);
    store.clear();
    assert!(storage.contains("gp_theme"));
    assert_eq!(storage.len(), 1);
}

// =============================================================
// Storage failures
// =============================================================

#[test]
fn broken_storage_initializes_with_defaults() {
    let store = SessionStore::initialize(BrokenStorage, SessionConfig::default());
    assert_eq!(store.token(), "");
    assert_eq!(store.display_name(), "admin");
}

#[test]
fn broken_storage_mutations_still_update_memory() {
    let mut store = SessionStore::initialize(BrokenStorage, SessionConfig::default());
    store.establish("abc", Some("alice"));
    assert_eq!(store.token(), "abc");
    assert_eq!(store.authorization(), Some("Bearer abc".to_owned()));
    store.clear();
    assert!(!store.is_authenticated());
}
