use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use crate::{
    api::error,
    modules::file_upload::{repository::FileRepository, schema::StoredFileEntity},
};

#[derive(Clone)]
pub struct FileRepositoryDisk {
    root: PathBuf,
}

impl FileRepositoryDisk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn write_new(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = tokio::fs::OpenOptions::new().write(true).create_new(true).open(path).await?;
        let written = async {
            file.write_all(bytes).await?;
            file.flush().await
        }
        .await;
        if let Err(err) = written {
            drop(file);
            tokio::fs::remove_file(path).await.ok();
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl FileRepository for FileRepositoryDisk {
    async fn create(&self, filename: &str, bytes: &[u8]) -> Result<u64, error::SystemError> {
        let path = self.root.join(filename);
        match Self::write_new(&path, bytes).await {
            Ok(()) => Ok(bytes.len() as u64),
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                Err(error::SystemError::conflict(format!("File {filename} already exists")))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn delete(&self, filename: &str) -> Result<(), error::SystemError> {
        match tokio::fs::remove_file(self.root.join(filename)).await {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }

    async fn list(&self) -> Result<Vec<StoredFileEntity>, error::SystemError> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            // Entries can vanish between read_dir and stat.
            let metadata = match entry.metadata().await {
                Ok(metadata) => metadata,
                Err(err) if err.kind() == ErrorKind::NotFound => continue,
                Err(err) => return Err(err.into()),
            };
            if !metadata.is_file() {
                continue;
            }

            files.push(StoredFileEntity {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: metadata.len(),
                modified: metadata.modified()?.into(),
            });
        }

        Ok(files)
    }
}
