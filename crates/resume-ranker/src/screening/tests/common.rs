use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::matching::{Candidate, CandidateId, EngineConfig};
use crate::screening::intake::ResumeUpload;
use crate::screening::job::JobOpening;
use crate::screening::repository::{RepositoryError, ScreeningRepository};
use crate::screening::{screening_router, ScreeningService};

pub(super) fn text_upload(file_name: &str, body: &str) -> ResumeUpload {
    ResumeUpload::new(file_name, "text/plain").with_content(body)
}

pub(super) fn pdf_upload(file_name: &str) -> ResumeUpload {
    ResumeUpload {
        file_name: file_name.to_string(),
        content_type: "application/pdf".to_string(),
        content: Some("%PDF-1.7 binary body".to_string()),
        size_bytes: Some(48_213),
    }
}

pub(super) fn build_service() -> (ScreeningService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ScreeningService::new(repository.clone(), EngineConfig::default());
    (service, repository)
}

pub(super) fn router_with_service(service: ScreeningService<MemoryRepository>) -> axum::Router {
    screening_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json")
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    candidates: Mutex<Vec<Candidate>>,
    job: Mutex<JobOpening>,
}

impl ScreeningRepository for MemoryRepository {
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        let mut guard = self.candidates.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == candidate.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(candidate.clone());
        Ok(candidate)
    }

    fn update(&self, candidate: Candidate) -> Result<(), RepositoryError> {
        let mut guard = self.candidates.lock().expect("repository mutex poisoned");
        match guard.iter_mut().find(|existing| existing.id == candidate.id) {
            Some(slot) => {
                *slot = candidate;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn remove(&self, id: &CandidateId) -> Result<Candidate, RepositoryError> {
        let mut guard = self.candidates.lock().expect("repository mutex poisoned");
        let position = guard
            .iter()
            .position(|existing| &existing.id == id)
            .ok_or(RepositoryError::NotFound)?;
        Ok(guard.remove(position))
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        let guard = self.candidates.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|existing| &existing.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(self.candidates.lock().expect("repository mutex poisoned").clone())
    }

    fn load_job(&self) -> Result<JobOpening, RepositoryError> {
        Ok(self.job.lock().expect("repository mutex poisoned").clone())
    }

    fn store_job(&self, job: JobOpening) -> Result<(), RepositoryError> {
        *self.job.lock().expect("repository mutex poisoned") = job;
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl ScreeningRepository for UnavailableRepository {
    fn insert(&self, _candidate: Candidate) -> Result<Candidate, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn update(&self, _candidate: Candidate) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn remove(&self, _id: &CandidateId) -> Result<Candidate, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn load_job(&self) -> Result<JobOpening, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn store_job(&self, _job: JobOpening) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

/// Memory store that refuses inserts once it holds `capacity` candidates.
pub(super) struct CappedRepository {
    inner: MemoryRepository,
    capacity: usize,
}

impl CappedRepository {
    pub(super) fn new(capacity: usize) -> Self {
        Self {
            inner: MemoryRepository::default(),
            capacity,
        }
    }
}

impl ScreeningRepository for CappedRepository {
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError> {
        if self.inner.list()?.len() >= self.capacity {
            return Err(RepositoryError::Unavailable("store full".to_string()));
        }
        self.inner.insert(candidate)
    }

    fn update(&self, candidate: Candidate) -> Result<(), RepositoryError> {
        self.inner.update(candidate)
    }

    fn remove(&self, id: &CandidateId) -> Result<Candidate, RepositoryError> {
        self.inner.remove(id)
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn list(&self) -> Result<Vec<Candidate>, RepositoryError> {
        self.inner.list()
    }

    fn load_job(&self) -> Result<JobOpening, RepositoryError> {
        self.inner.load_job()
    }

    fn store_job(&self, job: JobOpening) -> Result<(), RepositoryError> {
        self.inner.store_job(job)
    }
}
