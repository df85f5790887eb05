//! # User Directory Repository
//!
//! Account records live in a single YAML file at the root of the data
//! directory:
//!
//! ```yaml
//! - uid: "u-1"
//!   email: "ana@example.com"
//!   displayName: "Ana"
//!   disabled: false
//! ```
//!
//! A missing file is an empty directory. Updates rewrite the file through
//! a temp file and a rename while holding the connection's lock.

use std::fs;
use std::io;

use async_trait::async_trait;
use tracing::{debug, info};

use super::connection::JsonConnection;
use crate::domain::models::UserRecord;
use crate::storage::traits::UserDirectory;
use crate::storage::StorageError;

#[derive(Clone)]
pub struct UserRepository {
    connection: JsonConnection,
}

impl UserRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn load_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        let path = self.connection.user_directory_file();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No user directory at {}", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::io(&path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_yaml::from_str(&contents)
            .map_err(|source| StorageError::InvalidUserDirectory { path, source })
    }

    fn save_users(&self, users: &[UserRecord]) -> Result<(), StorageError> {
        let path = self.connection.user_directory_file();
        let contents = serde_yaml::to_string(users).map_err(|source| {
            StorageError::InvalidUserDirectory {
                path: path.clone(),
                source,
            }
        })?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents).map_err(|e| StorageError::io(&temp_path, e))?;
        fs::rename(&temp_path, &path).map_err(|e| StorageError::io(&path, e))?;
        Ok(())
    }

    /// Overwrite the whole directory; used by tests and seeding tools
    pub fn store_users(&self, users: &[UserRecord]) -> Result<(), StorageError> {
        let _guard = self
            .connection
            .user_directory_lock()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        self.save_users(users)
    }

    fn update_disabled(&self, uid: &str, disabled: bool) -> Result<UserRecord, StorageError> {
        let _guard = self
            .connection
            .user_directory_lock()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut users = self.load_users()?;
        let user = users
            .iter_mut()
            .find(|user| user.uid == uid)
            .ok_or_else(|| StorageError::UserNotFound(uid.to_string()))?;
        user.disabled = disabled;
        let updated = user.clone();

        self.save_users(&users)?;
        Ok(updated)
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn list_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        self.load_users()
    }

    async fn set_user_disabled(
        &self,
        uid: &str,
        disabled: bool,
    ) -> Result<UserRecord, StorageError> {
        let updated = self.update_disabled(uid, disabled)?;
        info!("Set disabled={} for user {}", disabled, uid);
        Ok(updated)
    }
}
