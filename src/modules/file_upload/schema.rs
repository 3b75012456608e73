use serde::{Deserialize, Serialize};

/// A file currently present in the upload directory.
#[derive(Debug, Clone)]
pub struct StoredFileEntity {
    pub name: String,
    pub size: u64,
    pub modified: chrono::DateTime<chrono::Utc>,
}

/// One accepted file, as reported back to the uploader.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadedFile {
    pub originalname: String,
    pub size: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileUploadResponse {
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileSummary {
    pub name: String,
    pub size: u64,
}

impl From<StoredFileEntity> for FileSummary {
    fn from(entity: StoredFileEntity) -> Self {
        FileSummary { name: entity.name, size: entity.size }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileListResponse {
    pub files: Vec<FileSummary>,
}
