use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::errors::AppError;
use crate::repositories::storage::ResumeStorage;

/// Stores resumes under a configured upload directory on the local disk.
#[derive(Debug, Clone)]
pub struct LocalResumeStorage {
    upload_dir: PathBuf,
}

impl LocalResumeStorage {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        LocalResumeStorage {
            upload_dir: upload_dir.into(),
        }
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_upload_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.upload_dir).await?;
        Ok(())
    }
}

#[async_trait]
impl ResumeStorage for LocalResumeStorage {
    fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), AppError> {
        fs::write(path, bytes).await?;
        Ok(())
    }

    async fn remove(&self, path: &Path) -> Result<(), AppError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
