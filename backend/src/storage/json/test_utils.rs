//! Temporary data directories for storage tests.
//!
//! The directory is removed when the environment is dropped, even if the
//! test panics.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde_json::Value;
use tempfile::TempDir;

use super::connection::JsonConnection;
use crate::domain::models::UserRecord;

pub struct TestEnvironment {
    pub connection: JsonConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
    _temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    /// Write one collection for a user, creating the user directory
    pub fn seed(&self, user_id: &str, collection: &str, documents: Vec<Value>) {
        self.connection
            .write_collection(user_id, collection, &documents)
            .expect("failed to seed collection");
    }

    pub fn seed_users_yaml(&self, contents: &str) {
        fs::write(self.connection.user_directory_file(), contents)
            .expect("failed to seed users.yaml");
    }

    pub fn user(uid: &str, disabled: bool) -> UserRecord {
        UserRecord {
            uid: uid.to_string(),
            email: Some(format!("{}@example.com", uid)),
            display_name: None,
            disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path = {
            let env = TestEnvironment::new()?;
            env.seed("u1", "transactions", vec![]);
            assert!(env.base_path.join("users").join("u1").exists());
            env.base_path.clone()
        };
        assert!(!base_path.exists());
        Ok(())
    }
}
