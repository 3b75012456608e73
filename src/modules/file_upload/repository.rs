use crate::{api::error, modules::file_upload::schema::StoredFileEntity};

#[async_trait::async_trait]
pub trait FileRepository {
    /// Writes `bytes` under `filename` and returns the stored size. Never
    /// replaces an existing file: a taken name yields `SystemError::Conflict`.
    async fn create(&self, filename: &str, bytes: &[u8]) -> Result<u64, error::SystemError>;

    /// Removes a stored file. Removing a file that is already gone succeeds.
    async fn delete(&self, filename: &str) -> Result<(), error::SystemError>;

    /// Stored files in enumeration order, which is unspecified.
    async fn list(&self) -> Result<Vec<StoredFileEntity>, error::SystemError>;
}
