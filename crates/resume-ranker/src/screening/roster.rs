use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::matching::{Candidate, CandidateId};

use super::intake::next_candidate_id;

/// Separator between skills inside the `Skills` column.
pub const SKILL_SEPARATOR: char = ';';

/// Failure while loading a roster CSV.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to open roster {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse roster CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Load candidates from a roster file with `Name`, `Notes`, `Skills` and optional `Id` columns.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Candidate>, RosterError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| RosterError::Open {
        path: path.display().to_string(),
        source,
    })?;
    parse_roster(file)
}

/// Parse roster rows in file order. Blank ids are generated; skills are normalized.
pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<Candidate>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut candidates = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        let id = row
            .id
            .map(CandidateId)
            .unwrap_or_else(next_candidate_id);

        let mut candidate = Candidate::new(id.0, row.name);
        candidate.notes = row.notes.unwrap_or_default();
        for skill in row.skills.unwrap_or_default().split(SKILL_SEPARATOR) {
            candidate.add_skill(skill);
        }
        candidates.push(candidate);
    }

    Ok(candidates)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Id", default, deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Notes", default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
    #[serde(rename = "Skills", default, deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }))
}
