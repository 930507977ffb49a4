use crate::matching::{Candidate, CandidateId};

use super::job::JobOpening;

/// Storage abstraction so the screening service can be exercised in isolation.
///
/// `list` must return candidates in insertion order; ranking ties fall back to it.
pub trait ScreeningRepository: Send + Sync {
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError>;
    fn update(&self, candidate: Candidate) -> Result<(), RepositoryError>;
    fn remove(&self, id: &CandidateId) -> Result<Candidate, RepositoryError>;
    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError>;
    fn list(&self) -> Result<Vec<Candidate>, RepositoryError>;
    fn load_job(&self) -> Result<JobOpening, RepositoryError>;
    fn store_job(&self, job: JobOpening) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
