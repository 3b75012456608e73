use std::path::PathBuf;

use crate::{api::error, constants};

/// A file that passed validation and is waiting to be written to disk.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// File upload configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_size: usize,
    pub max_files: usize,
    pub field_name: String,
    pub allowed_mime_types: Vec<String>,
    pub upload_dir: PathBuf,
    pub base_url: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: constants::MAX_FILE_SIZE,
            max_files: constants::MAX_FILES,
            field_name: constants::UPLOAD_FIELD.to_string(),
            allowed_mime_types: constants::ALLOWED_MIME_TYPES.iter().map(|m| m.to_string()).collect(),
            upload_dir: PathBuf::from(constants::UPLOAD_DIR),
            base_url: constants::UPLOAD_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
impl UploadConfig {
    pub fn with_upload_dir(upload_dir: impl Into<PathBuf>) -> Self {
        Self { upload_dir: upload_dir.into(), ..Default::default() }
    }
}

/// Why an upload request was refused because of what the client sent.
/// Each kind keeps its own message so callers can tell them apart.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("Invalid file type. Only PNG and JPEG images are allowed.")]
    InvalidFileType,
    #[error("File too large. Maximum per file: {}MB.", .max_file_size / (1024 * 1024))]
    FileTooLarge { max_file_size: usize },
    #[error("Too many files. Maximum per request: {max_files}.")]
    TooManyFiles { max_files: usize },
    #[error("No files uploaded.")]
    NoFiles,
}

impl From<UploadRejection> for error::SystemError {
    fn from(rejection: UploadRejection) -> Self {
        error::SystemError::bad_request(rejection.to_string())
    }
}
