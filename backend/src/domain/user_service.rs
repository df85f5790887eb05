//! Account listing and enable/disable for the admin dashboard.

use std::sync::Arc;

use tracing::info;

use super::commands::users::SetUserDisabledCommand;
use super::models::UserRecord;
use crate::storage::{StorageError, UserDirectory};

#[derive(Clone)]
pub struct UserService {
    directory: Arc<dyn UserDirectory>,
}

impl UserService {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    pub async fn list_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        self.directory.list_users().await
    }

    pub async fn set_user_disabled(
        &self,
        command: SetUserDisabledCommand,
    ) -> Result<UserRecord, StorageError> {
        info!(
            "{} user {}",
            if command.disabled { "Disabling" } else { "Enabling" },
            command.uid
        );
        self.directory
            .set_user_disabled(&command.uid, command.disabled)
            .await
    }
}
