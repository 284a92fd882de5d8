use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rstest::{fixture, rstest};
use zenflow_core::models::User;
use zenflow_storage::error::StorageError;
use zenflow_storage::session::{USER_ID_KEY, USER_KEY};
use zenflow_storage::{FileStore, KeyValueStore, MemoryStore, SessionStore};

fn user(id: i64, is_manager: bool) -> User {
    User {
        id,
        full_name: "Ana Souza".to_string(),
        email: "ana@zenflow.app".to_string(),
        birth_date: "1990-05-10T00:00:00".to_string(),
        national_id: "123.456.789-00".to_string(),
        is_manager,
        active: true,
        created_at: "2024-01-15T12:00:00Z".parse().unwrap(),
        updated_at: Some("2024-02-01T08:00:00Z".parse().unwrap()),
    }
}

#[fixture]
fn memory() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

#[rstest]
fn save_then_load_returns_the_same_user(memory: Arc<MemoryStore>) {
    let session = SessionStore::new(memory);
    let ana = user(7, false);

    session.save(&ana).unwrap();

    assert_eq!(session.load(), Some(ana));
    assert_eq!(session.load_id(), Some(7));
    assert!(session.is_logged_in());
}

#[rstest]
fn clear_then_load_is_absent(memory: Arc<MemoryStore>) {
    let session = SessionStore::new(memory.clone());
    session.save(&user(7, true)).unwrap();

    session.clear().unwrap();

    assert_eq!(session.load(), None);
    assert_eq!(session.load_id(), None);
    assert!(memory.is_empty());
}

#[rstest]
fn never_saved_is_absent(memory: Arc<MemoryStore>) {
    let session = SessionStore::new(memory);
    assert_eq!(session.load(), None);
    assert_eq!(session.load_id(), None);
    assert!(!session.is_logged_in());
}

#[rstest]
fn malformed_payloads_load_as_absent(memory: Arc<MemoryStore>) {
    memory.set(USER_KEY, "{not json").unwrap();
    memory.set(USER_ID_KEY, "seven").unwrap();
    let session = SessionStore::new(memory);

    assert_eq!(session.load(), None);
    assert_eq!(session.load_id(), None);
}

#[test]
fn file_backed_session_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let ana = user(7, false);

    SessionStore::new(Arc::new(FileStore::open(dir.path()).unwrap()))
        .save(&ana)
        .unwrap();

    let reopened = SessionStore::new(Arc::new(FileStore::open(dir.path()).unwrap()));
    assert_eq!(reopened.load(), Some(ana));
    assert_eq!(reopened.load_id(), Some(7));

    reopened.clear().unwrap();
    assert!(!dir.path().join("user.json").exists());
    assert!(!dir.path().join("userId.json").exists());
}

/// Accepts the first write, rejects everything after it.
#[derive(Default)]
struct QuotaStore {
    inner: MemoryStore,
    full: AtomicBool,
}

impl KeyValueStore for QuotaStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.full.swap(true, Ordering::SeqCst) {
            return Err(StorageError::Write {
                key: key.to_string(),
                source: io::Error::other("quota exceeded"),
            });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Err(StorageError::Remove {
            key: key.to_string(),
            source: io::Error::other("read-only"),
        })
    }
}

#[test]
fn partial_save_leaves_the_first_key_written() {
    let store = Arc::new(QuotaStore::default());
    let session = SessionStore::new(store.clone());

    let err = session.save(&user(7, false)).unwrap_err();

    assert!(matches!(err, StorageError::Write { ref key, .. } if key == USER_ID_KEY));
    assert!(store.inner.get(USER_KEY).unwrap().is_some());
    assert_eq!(store.inner.get(USER_ID_KEY).unwrap(), None);
}

#[test]
fn clear_reports_storage_failures() {
    let session = SessionStore::new(Arc::new(QuotaStore::default()));
    assert!(matches!(session.clear(), Err(StorageError::Remove { .. })));
}
