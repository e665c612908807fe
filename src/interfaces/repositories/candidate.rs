use async_trait::async_trait;

use crate::{entities::candidate::Candidate, errors::AppError};

/// Record store collaborator. Identifiers are monotonically increasing,
/// start at 1, and are never reused after deletion.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn allocate_id(&self) -> Result<u64, AppError>;
    async fn put(&self, id: u64, candidate: Candidate) -> Result<(), AppError>;
    async fn get(&self, id: u64) -> Result<Option<Candidate>, AppError>;
    async fn delete(&self, id: u64) -> Result<Option<Candidate>, AppError>;
    async fn list(&self) -> Result<Vec<Candidate>, AppError>;
}
