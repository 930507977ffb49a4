use metrics_exporter_prometheus::PrometheusHandle;
use resume_ranker::screening::{JobOpening, RepositoryError, ScreeningRepository};
use resume_ranker::{Candidate, CandidateId, ScoringEngine};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<ScoringEngine>,
}

/// Process-local store; candidates keep their upload order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryScreeningRepository {
    candidates: Arc<Mutex<Vec<Candidate>>>,
    job: Arc<Mutex<JobOpening>>,
}

impl ScreeningRepository for InMemoryScreeningRepository {
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
        let guard = self.candidates.lock().expect("repository mutex poisoned");
        Ok(guard.clone())
    }

    fn load_job(&self) -> Result<JobOpening, RepositoryError> {
        Ok(self.job.lock().expect("job mutex poisoned").clone())
    }

    fn store_job(&self, job: JobOpening) -> Result<(), RepositoryError> {
        *self.job.lock().expect("job mutex poisoned") = job;
        Ok(())
    }
}
