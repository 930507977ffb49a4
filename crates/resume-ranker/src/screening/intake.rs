use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use mime::Mime;
use serde::{Deserialize, Serialize};

use crate::matching::{Candidate, CandidateId, SourceDocument};

/// Validation errors raised while admitting an uploaded resume.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("unsupported resume format '{content_type}' for {file_name}")]
    UnsupportedType {
        file_name: String,
        content_type: String,
    },
    #[error("uploaded resume is missing a file name")]
    MissingFileName,
}

/// Resume formats accepted at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
    Txt,
    Png,
    Jpg,
}

impl DocumentKind {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Pdf,
            Self::Doc,
            Self::Docx,
            Self::Txt,
            Self::Png,
            Self::Jpg,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Doc => "DOC",
            Self::Docx => "DOCX",
            Self::Txt => "TXT",
            Self::Png => "PNG",
            Self::Jpg => "JPG",
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Self::Txt => "text/plain",
            Self::Png => "image/png",
            Self::Jpg => "image/jpeg",
        }
    }

    pub fn from_mime(mime: &Mime) -> Option<Self> {
        let essence = mime.essence_str();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.mime_type().eq_ignore_ascii_case(essence))
    }

    /// Only plain text is read into notes; binary formats need an external decoder.
    pub const fn is_plain_text(self) -> bool {
        matches!(self, Self::Txt)
    }
}

/// Uploaded file as received from the data-entry surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeUpload {
    pub file_name: String,
    /// Declared MIME type; resolved from the file name when blank.
    #[serde(default)]
    pub content_type: String,
    /// Decoded text body. Only consulted for plain-text uploads.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

impl ResumeUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            content: None,
            size_bytes: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

static CANDIDATE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_candidate_id() -> CandidateId {
    let id = CANDIDATE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CandidateId(format!("cand-{id:06}"))
}

/// Turns uploads into candidates with generated ids and source metadata.
#[derive(Debug, Clone, Default)]
pub struct ResumeIntake;

impl ResumeIntake {
    pub fn new() -> Self {
        Self
    }

    pub fn admit(&self, upload: ResumeUpload) -> Result<Candidate, IntakeError> {
        let file_name = upload.file_name.trim().to_string();
        if file_name.is_empty() {
            return Err(IntakeError::MissingFileName);
        }

        let content_type = resolve_content_type(&file_name, &upload.content_type);
        let kind = content_type
            .parse::<Mime>()
            .ok()
            .and_then(|mime| DocumentKind::from_mime(&mime))
            .ok_or_else(|| IntakeError::UnsupportedType {
                file_name: file_name.clone(),
                content_type: content_type.clone(),
            })?;

        let notes = if kind.is_plain_text() {
            upload.content.clone().unwrap_or_default()
        } else {
            String::new()
        };
        let size_bytes = upload
            .size_bytes
            .or_else(|| upload.content.as_ref().map(|body| body.len() as u64))
            .unwrap_or(0);

        let mut candidate = Candidate::new(next_candidate_id().0, display_name(&file_name));
        candidate.notes = notes;
        candidate.source = Some(SourceDocument {
            file_name,
            content_type: kind.mime_type().to_string(),
            size_bytes,
            received_at: Utc::now(),
        });

        Ok(candidate)
    }
}

fn resolve_content_type(file_name: &str, declared: &str) -> String {
    let declared = declared.trim();
    if declared.is_empty() {
        mime_guess::from_path(file_name)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string()
    } else {
        declared.to_ascii_lowercase()
    }
}

/// File name without its final extension, e.g. `jane.doe.resume.pdf` -> `jane.doe.resume`.
pub(crate) fn display_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() && !extension.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}
