use std::path::Path;

use async_trait::async_trait;

use crate::errors::AppError;

/// Filesystem collaborator for resume files. The existence check is
/// synchronous so the filename resolver can probe candidate paths through
/// a plain closure.
#[async_trait]
pub trait ResumeStorage: Send + Sync {
    fn upload_dir(&self) -> &Path;
    fn exists(&self, path: &Path) -> bool;
    async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), AppError>;
    /// Tolerates a missing target.
    async fn remove(&self, path: &Path) -> Result<(), AppError>;
}
