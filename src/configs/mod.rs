use std::path::Path;

use crate::api::error;

/// Creates the upload directory (and its parents) when it does not exist yet.
pub async fn prepare_upload_dir(upload_dir: impl AsRef<Path>) -> Result<(), error::SystemError> {
    let upload_dir = upload_dir.as_ref();
    tokio::fs::create_dir_all(upload_dir).await?;
    log::info!("Upload directory ready at {}", upload_dir.display());
    Ok(())
}
