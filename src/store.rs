use std::path::PathBuf;

use crate::{error::StoreError, types::CredentialRecord};

/// Fixed identifier of the singleton credential record.
pub const CREDENTIAL_ID: &str = "spotify";

const RECORD_FILE: &str = "token.json";

/// Durable storage for the refresh credential.
///
/// The store keeps exactly one record, written as a JSON document inside the
/// store directory. Saving overwrites the whole document, so repeated saves
/// with the same or different values always leave a single record holding
/// the latest value.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Establishes the durable backing by creating the store directory.
    ///
    /// Called once at startup; a failure here means the process must not
    /// start serving traffic, since it would silently lose the refresh
    /// credential on the next restart.
    pub async fn connect(dir: PathBuf) -> Result<Self, StoreError> {
        async_fs::create_dir_all(&dir).await?;
        Ok(CredentialStore {
            path: dir.join(RECORD_FILE),
        })
    }

    /// Returns the stored refresh credential, or `None` on first run.
    ///
    /// An absent record file is the normal empty state and not an error; an
    /// unreadable or unparsable record is.
    pub async fn load(&self) -> Result<Option<String>, StoreError> {
        let content = match async_fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let record: CredentialRecord = serde_json::from_str(&content)?;
        // Only the fixed record id is recognized; anything else is treated
        // as absent and overwritten by the next save.
        if record.id == CREDENTIAL_ID {
            Ok(Some(record.refresh_token))
        } else {
            Ok(None)
        }
    }

    /// Upserts the singleton record with the given refresh credential.
    pub async fn save(&self, refresh_token: &str) -> Result<(), StoreError> {
        let record = CredentialRecord {
            id: CREDENTIAL_ID.to_string(),
            refresh_token: refresh_token.to_string(),
        };
        let json = serde_json::to_string_pretty(&record)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}
