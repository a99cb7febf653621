use crate::{write_atomic, StoreError};
use cinelens_models::User;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

/// The current-user slot: at most one persisted [`User`] per device.
///
/// Reads and writes are synchronous and whole-record; the last writer wins
/// and there is no merge with any previous value.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The signed-in user, or absent if the slot was never set, was
    /// cleared, or holds a record we can no longer parse. An unreadable
    /// record is treated the same as "not set" rather than an error: there
    /// is nothing the caller could do with it either way.
    pub fn current_user(&self) -> Result<Option<User>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str(&content) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                warn!("Ignoring unparseable profile record at {:?}: {}", self.path, err);
                Ok(None)
            }
        }
    }

    pub fn set_current_user(&self, user: &User) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(user)?;
        write_atomic(&self.path, &content)
    }

    /// Sign-out: remove the slot. Subsequent reads return absent until a
    /// new user is set. Clearing an already-empty slot is not an error.
    pub fn clear_current_user(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_user() -> User {
        User {
            id: "1724497200123".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            photo_url: Some("https://example.com/ada.png".to_string()),
        }
    }

    #[test]
    fn test_profile_round_trip() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));

        assert_eq!(store.current_user().unwrap(), None);

        let user = test_user();
        store.set_current_user(&user).unwrap();
        assert_eq!(store.current_user().unwrap(), Some(user));
    }

    #[test]
    fn test_clear_current_user() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));

        store.set_current_user(&test_user()).unwrap();
        store.clear_current_user().unwrap();
        assert_eq!(store.current_user().unwrap(), None);

        // Clearing an empty slot is a no-op, not an error.
        store.clear_current_user().unwrap();
    }

    #[test]
    fn test_set_overwrites_whole_record() {
        let dir = tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));

        store.set_current_user(&test_user()).unwrap();
        let replacement = User {
            id: "1724497300456".to_string(),
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            photo_url: None,
        };
        store.set_current_user(&replacement).unwrap();
        assert_eq!(store.current_user().unwrap(), Some(replacement));
    }

    #[test]
    fn test_corrupt_record_reads_as_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = ProfileStore::new(path);
        assert_eq!(store.current_user().unwrap(), None);
    }

    #[test]
    fn test_legacy_field_names_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(
            &path,
            r#"{"id":"1690000000000","name":"Lin","email":"lin@example.com","photoURL":"data:image/png;base64,iVBOR"}"#,
        )
        .unwrap();

        let store = ProfileStore::new(path);
        let user = store.current_user().unwrap().unwrap();
        assert_eq!(user.name, "Lin");
        assert_eq!(user.photo_url.as_deref(), Some("data:image/png;base64,iVBOR"));
    }
}
