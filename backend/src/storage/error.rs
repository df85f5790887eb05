use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid JSON collection: {source}", path.display())]
    InvalidCollection {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} is not a valid user directory: {source}", path.display())]
    InvalidUserDirectory {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Malformed {collection} record '{document_id}': {reason}")]
    MalformedRecord {
        collection: &'static str,
        document_id: String,
        reason: String,
    },

    #[error("Invalid user id '{0}'")]
    InvalidUserId(String),

    #[error("User not found: {0}")]
    UserNotFound(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}
