use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::{debug, info, warn};

use super::financial_repository::FinancialRepository;
use super::user_repository::UserRepository;
use crate::storage::traits::Connection;
use crate::storage::StorageError;

pub const USERS_DIRECTORY: &str = "users";
pub const USER_DIRECTORY_FILE: &str = "users.yaml";

/// JsonConnection manages the paths of the snapshot directory
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: Arc<PathBuf>,
    /// Serializes read-modify-write cycles on `users.yaml`
    user_directory_lock: Arc<Mutex<()>>,
}

impl JsonConnection {
    /// Open a snapshot directory, creating it if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self, StorageError> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            info!("Creating data directory {}", base_path.display());
            fs::create_dir_all(&base_path).map_err(|e| StorageError::io(&base_path, e))?;
        }

        Ok(Self {
            base_directory: Arc::new(base_path),
            user_directory_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn users_root(&self) -> PathBuf {
        self.base_directory.join(USERS_DIRECTORY)
    }

    pub fn user_directory_file(&self) -> PathBuf {
        self.base_directory.join(USER_DIRECTORY_FILE)
    }

    pub(crate) fn user_directory_lock(&self) -> &Mutex<()> {
        &self.user_directory_lock
    }

    /// Directory holding one user's collections.
    ///
    /// The uid becomes a path component, so anything that could escape
    /// `users/` is refused.
    pub fn user_directory(&self, user_id: &str) -> Result<PathBuf, StorageError> {
        let valid = !user_id.is_empty()
            && user_id != "."
            && user_id != ".."
            && !user_id.contains(&['/', '\\', '\0'][..]);
        if !valid {
            return Err(StorageError::InvalidUserId(user_id.to_string()));
        }
        Ok(self.users_root().join(user_id))
    }

    pub fn collection_path(
        &self,
        user_id: &str,
        collection: &str,
    ) -> Result<PathBuf, StorageError> {
        Ok(self.user_directory(user_id)?.join(format!("{}.json", collection)))
    }

    /// Raw documents of one collection. A missing file is an empty
    /// collection, as in the store.
    pub fn read_collection(
        &self,
        user_id: &str,
        collection: &str,
    ) -> Result<Vec<Value>, StorageError> {
        let path = self.collection_path(user_id, collection)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No {} collection for user {}", collection, user_id);
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::io(&path, e)),
        };

        serde_json::from_str::<Vec<Value>>(&contents)
            .map_err(|source| StorageError::InvalidCollection { path, source })
    }

    /// Write a collection back; used by tests and seeding tools
    pub fn write_collection(
        &self,
        user_id: &str,
        collection: &str,
        documents: &[Value],
    ) -> Result<(), StorageError> {
        let directory = self.user_directory(user_id)?;
        fs::create_dir_all(&directory).map_err(|e| StorageError::io(&directory, e))?;

        let path = self.collection_path(user_id, collection)?;
        let contents = serde_json::to_string_pretty(documents)
            .map_err(|source| StorageError::InvalidCollection {
                path: path.clone(),
                source,
            })?;
        fs::write(&path, contents).map_err(|e| StorageError::io(&path, e))
    }

    /// Names of the per-user directories, sorted
    pub fn list_user_directories(&self) -> Result<Vec<String>, StorageError> {
        let root = self.users_root();
        let entries = match fs::read_dir(&root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(&root, e)),
        };

        let mut user_ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StorageError::io(&root, e))?;
            let file_type = entry.file_type().map_err(|e| StorageError::io(entry.path(), e))?;
            if !file_type.is_dir() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) => user_ids.push(name.to_string()),
                None => warn!("Skipping user directory with a non UTF-8 name: {:?}", entry.path()),
            }
        }
        user_ids.sort();
        Ok(user_ids)
    }
}

impl Connection for JsonConnection {
    type FinancialRepository = FinancialRepository;
    type UserRepository = UserRepository;

    fn create_financial_repository(&self) -> Self::FinancialRepository {
        FinancialRepository::new(self.clone())
    }

    fn create_user_repository(&self) -> Self::UserRepository {
        UserRepository::new(self.clone())
    }
}
