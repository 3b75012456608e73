use log::{info, warn};
use rand::Rng;
use std::path::Path;
use std::sync::Arc;

use crate::api::error;
use crate::modules::file_upload::{
    model::{IncomingFile, UploadConfig, UploadRejection},
    repository::FileRepository,
    schema::{FileUploadResponse, StoredFileEntity, UploadedFile},
};

/// Fresh names drawn before giving up on a name collision.
const SAVE_ATTEMPTS: usize = 3;

/// Longest client extension carried into a storage name.
const MAX_EXTENSION_LEN: usize = 10;

#[derive(Clone)]
pub struct FileUploadService<R>
where
    R: FileRepository + Send + Sync,
{
    file_repo: Arc<R>,
    config: UploadConfig,
}

impl<R> FileUploadService<R>
where
    R: FileRepository + Send + Sync,
{
    pub fn new(file_repo: Arc<R>, config: UploadConfig) -> Self {
        Self { file_repo, config }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Decides whether a new file part may be read, given how many files of
    /// this request were already accepted. Runs before any byte is consumed.
    pub fn check_part(&self, accepted: usize, mime_type: &str) -> Result<(), UploadRejection> {
        if accepted >= self.config.max_files {
            return Err(UploadRejection::TooManyFiles { max_files: self.config.max_files });
        }

        if !self.config.allowed_mime_types.iter().any(|allowed| allowed == mime_type) {
            return Err(UploadRejection::InvalidFileType);
        }

        Ok(())
    }

    /// Checked while streaming, with the size the part would reach.
    pub fn check_size(&self, size: usize) -> Result<(), UploadRejection> {
        if size > self.config.max_file_size {
            return Err(UploadRejection::FileTooLarge { max_file_size: self.config.max_file_size });
        }
        Ok(())
    }

    /// Save file to disk under a fresh name, drawing again if the name is taken
    async fn save_file(&self, file: &IncomingFile) -> Result<(String, u64), error::SystemError> {
        let mut attempt = 1;
        loop {
            let filename = generate_filename(&file.original_filename);
            match self.file_repo.create(&filename, &file.bytes).await {
                Ok(size) => return Ok((filename, size)),
                Err(error::SystemError::Conflict(_)) if attempt < SAVE_ATTEMPTS => {
                    warn!("Storage name {} already taken, drawing another", filename);
                    attempt += 1;
                }
                Err(error::SystemError::Conflict(msg)) => {
                    return Err(error::SystemError::internal(msg.into_owned()));
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Writes every file of one request. Either all of them end up on disk or
    /// none do: on failure the files already written are removed again.
    pub async fn store_files(
        &self,
        files: Vec<IncomingFile>,
    ) -> Result<FileUploadResponse, error::SystemError> {
        if files.is_empty() {
            return Err(UploadRejection::NoFiles.into());
        }

        let mut written = Vec::with_capacity(files.len());
        let mut uploaded = Vec::with_capacity(files.len());

        for file in files {
            match self.save_file(&file).await {
                Ok((filename, size)) => {
                    info!(
                        "Stored {} ({}, {} bytes) as {}",
                        file.original_filename, file.mime_type, size, filename
                    );
                    written.push(filename);
                    uploaded.push(UploadedFile { originalname: file.original_filename, size });
                }
                Err(e) => {
                    self.discard(&written).await;
                    return Err(e);
                }
            }
        }

        Ok(FileUploadResponse { files: uploaded })
    }

    async fn discard(&self, filenames: &[String]) {
        for filename in filenames {
            if let Err(e) = self.file_repo.delete(filename).await {
                log::error!("Failed to remove {} after an aborted upload: {:?}", filename, e);
            }
        }
    }

    pub async fn list_files(&self) -> Result<Vec<StoredFileEntity>, error::SystemError> {
        self.file_repo.list().await
    }
}

/// Storage name for an uploaded file: `<epoch millis>-<random><.ext>`.
/// Only the extension of the client-supplied name is kept, and only when it
/// is short and alphanumeric; otherwise the name goes without one.
pub fn generate_filename(original_filename: &str) -> String {
    let extension = Path::new(original_filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| {
            (1..=MAX_EXTENSION_LEN).contains(&ext.len())
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("{millis}-{suffix}{extension}")
}
