use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::matching::{Candidate, CandidateId, EngineConfig, ScoreResult, ScoringEngine};

use super::intake::{IntakeError, ResumeIntake, ResumeUpload};
use super::job::{JobOpening, JobUpdate};
use super::repository::{RepositoryError, ScreeningRepository};

/// Partial edit applied to a stored candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Service composing resume intake, the repository, and the scoring engine.
pub struct ScreeningService<R> {
    intake: ResumeIntake,
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
}

impl<R> ScreeningService<R>
where
    R: ScreeningRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: EngineConfig) -> Self {
        Self::with_engine(repository, Arc::new(ScoringEngine::new(config)))
    }

    pub fn with_engine(repository: Arc<R>, engine: Arc<ScoringEngine>) -> Self {
        Self {
            intake: ResumeIntake::new(),
            repository,
            engine,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn job(&self) -> Result<JobOpening, ScreeningServiceError> {
        Ok(self.repository.load_job()?)
    }

    pub fn update_job(&self, update: JobUpdate) -> Result<JobOpening, ScreeningServiceError> {
        let mut job = self.repository.load_job()?;
        job.apply(update);
        self.repository.store_job(job.clone())?;
        debug!(
            required_skills = job.required_skills.len(),
            "job opening updated"
        );
        Ok(job)
    }

    /// Add a required skill; blank input leaves the job unchanged.
    pub fn add_required_skill(&self, raw: &str) -> Result<JobOpening, ScreeningServiceError> {
        let mut job = self.repository.load_job()?;
        if job.add_required_skill(raw) {
            self.repository.store_job(job.clone())?;
        }
        Ok(job)
    }

    pub fn remove_required_skill(&self, skill: &str) -> Result<JobOpening, ScreeningServiceError> {
        let mut job = self.repository.load_job()?;
        if job.remove_required_skill(skill) {
            self.repository.store_job(job.clone())?;
        }
        Ok(job)
    }

    /// Admit a single resume and store the resulting candidate.
    pub fn upload(&self, upload: ResumeUpload) -> Result<Candidate, ScreeningServiceError> {
        let candidate = self.intake.admit(upload).map_err(|err| {
            warn!(error = %err, "resume rejected at intake");
            err
        })?;
        let stored = self.repository.insert(candidate)?;
        info!(candidate_id = %stored.id, name = %stored.name, "candidate added");
        Ok(stored)
    }

    /// Admit a batch of resumes. Every upload is validated before anything is stored, and a
    /// failed insert removes the candidates already stored by this batch.
    pub fn upload_batch(
        &self,
        uploads: Vec<ResumeUpload>,
    ) -> Result<Vec<Candidate>, ScreeningServiceError> {
        let admitted = uploads
            .into_iter()
            .map(|upload| self.intake.admit(upload))
            .collect::<Result<Vec<_>, _>>()?;

        let mut stored = Vec::with_capacity(admitted.len());
        for candidate in admitted {
            match self.repository.insert(candidate) {
                Ok(candidate) => stored.push(candidate),
                Err(err) => {
                    self.rollback(&stored);
                    return Err(err.into());
                }
            }
        }
        info!(candidates = stored.len(), "resume batch added");
        Ok(stored)
    }

    pub fn candidates(&self) -> Result<Vec<Candidate>, ScreeningServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn remove_candidate(&self, id: &CandidateId) -> Result<Candidate, ScreeningServiceError> {
        let removed = self.repository.remove(id)?;
        info!(candidate_id = %id, "candidate removed");
        Ok(removed)
    }

    pub fn update_candidate(
        &self,
        id: &CandidateId,
        patch: CandidatePatch,
    ) -> Result<Candidate, ScreeningServiceError> {
        self.modify(id, |candidate| {
            if let Some(name) = patch.name {
                candidate.name = name;
            }
            if let Some(notes) = patch.notes {
                candidate.notes = notes;
            }
        })
    }

    /// Attach a declared skill; blank or duplicate input leaves the candidate unchanged.
    pub fn add_candidate_skill(
        &self,
        id: &CandidateId,
        raw: &str,
    ) -> Result<Candidate, ScreeningServiceError> {
        self.modify(id, |candidate| {
            candidate.add_skill(raw);
        })
    }

    pub fn remove_candidate_skill(
        &self,
        id: &CandidateId,
        skill: &str,
    ) -> Result<Candidate, ScreeningServiceError> {
        self.modify(id, |candidate| {
            candidate.remove_skill(skill);
        })
    }

    /// Rank every stored candidate against the current job opening.
    pub fn analyze(&self) -> Result<Vec<ScoreResult>, ScreeningServiceError> {
        let job = self.repository.load_job()?;
        let candidates = self.repository.list()?;
        let results = self
            .engine
            .rank(&candidates, job.required_skills.as_slice());
        info!(
            candidates = results.len(),
            required_skills = job.required_skills.len(),
            top_score = ?results.first().map(|result| result.score),
            "screening analysis complete"
        );
        Ok(results)
    }

    fn rollback(&self, stored: &[Candidate]) {
        for candidate in stored.iter().rev() {
            if let Err(err) = self.repository.remove(&candidate.id) {
                warn!(candidate_id = %candidate.id, error = %err, "batch rollback failed");
            }
        }
    }

    fn modify<F>(&self, id: &CandidateId, edit: F) -> Result<Candidate, ScreeningServiceError>
    where
        F: FnOnce(&mut Candidate),
    {
        let mut candidate = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        edit(&mut candidate);
        self.repository.update(candidate.clone())?;
        Ok(candidate)
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
