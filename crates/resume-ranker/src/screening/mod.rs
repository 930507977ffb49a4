//! Data-entry layer around the scoring engine: job setup, resume intake, candidate editing,
//! roster import, and the HTTP surface that drives analysis runs.

pub mod intake;
pub mod job;
pub mod repository;
pub mod roster;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use intake::{DocumentKind, IntakeError, ResumeIntake, ResumeUpload};
pub use job::{JobOpening, JobUpdate};
pub use repository::{RepositoryError, ScreeningRepository};
pub use roster::{load_roster, parse_roster, RosterError};
pub use router::{screening_router, AnalysisResponse, SkillRequest};
pub use service::{CandidatePatch, ScreeningService, ScreeningServiceError};
