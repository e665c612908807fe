use tracing::{info, warn};
use validator::Validate;

use crate::{
    entities::candidate::{Candidate, CandidateFilters, NewCandidate},
    errors::AppError,
    repositories::{candidate::CandidateStore, storage::ResumeStorage},
    utils::filename::{resolve_storage_path, resume_extension},
};

pub struct CandidateHandler<S, F>
where
    S: CandidateStore,
    F: ResumeStorage,
{
    pub store: S,
    pub storage: F,
}

impl<S, F> CandidateHandler<S, F>
where
    S: CandidateStore,
    F: ResumeStorage,
{
    pub fn new(store: S, storage: F) -> Self {
        CandidateHandler { store, storage }
    }

    /// Creates a candidate record from validated fields plus the uploaded
    /// resume bytes. The extension gate and field validation run before
    /// anything is allocated or written; after that, id allocation, file
    /// write and store insert abort together on failure, so no record is
    /// ever observable without its backing file.
    pub async fn create(
        &self,
        fields: NewCandidate,
        original_filename: Option<&str>,
        resume_bytes: &[u8],
    ) -> Result<Candidate, AppError> {
        let original = original_filename.unwrap_or("resume");
        resume_extension(original)?;

        fields.validate()?;

        let id = self.store.allocate_id().await?;

        let path = resolve_storage_path(self.storage.upload_dir(), id, original, |p| {
            self.storage.exists(p)
        });

        if let Err(e) = self.storage.write(&path, resume_bytes).await {
            // A failed or partial write must not leave an orphaned file.
            // The allocated id stays burned; ids are never reused anyway.
            if let Err(cleanup) = self.storage.remove(&path).await {
                warn!("Failed to clean up partial resume at {}: {}", path.display(), cleanup);
            }
            return Err(e);
        }

        let resume_filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume".to_string());
        let resume_path = path.to_string_lossy().into_owned();

        let candidate = fields.into_candidate(id, resume_filename, resume_path);

        if let Err(e) = self.store.put(id, candidate.clone()).await {
            if let Err(cleanup) = self.storage.remove(&path).await {
                warn!("Failed to remove resume at {}: {}", path.display(), cleanup);
            }
            return Err(e);
        }

        info!("Created candidate {} with resume {}", id, candidate.resume_filename);
        Ok(candidate)
    }

    /// Lists candidates matching the filters, newest first.
    pub async fn list(&self, filters: &CandidateFilters) -> Result<Vec<Candidate>, AppError> {
        let mut results: Vec<Candidate> = self
            .store
            .list()
            .await?
            .into_iter()
            .filter(|c| filters.matches(c))
            .collect();

        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(results)
    }

    pub async fn get(&self, id: u64) -> Result<Candidate, AppError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))
    }

    /// Removes the record, then the backing file. File removal is
    /// best-effort; the record removal is the primary effect.
    pub async fn delete(&self, id: u64) -> Result<Candidate, AppError> {
        let candidate = self
            .store
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))?;

        let path = std::path::Path::new(&candidate.resume_path);
        if let Err(e) = self.storage.remove(path).await {
            warn!("Failed to remove resume for candidate {}: {}", id, e);
        }

        info!("Deleted candidate {}", id);
        Ok(candidate)
    }
}
