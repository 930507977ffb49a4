use clap::Args;
use resume_ranker::config::AppConfig;
use resume_ranker::error::AppError;
use resume_ranker::screening::{load_roster, ResumeIntake, ResumeUpload, ScreeningServiceError};
use resume_ranker::telemetry::{self, LogSink};
use resume_ranker::{
    Candidate, EngineConfig, MatchStrategy, RequiredSkills, ScoreResult, ScoringEngine,
};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Required skill for the opening (repeat for each skill)
    #[arg(long = "skill", required = true)]
    pub(crate) skills: Vec<String>,
    /// Roster CSV with Name, Notes, Skills and optional Id columns
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Resume file to admit as a candidate (repeatable)
    #[arg(long = "resume")]
    pub(crate) resumes: Vec<PathBuf>,
    /// Matching strategy: substring or token_boundary
    #[arg(long)]
    pub(crate) strategy: Option<MatchStrategy>,
    /// Print results as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Matching strategy: substring or token_boundary
    #[arg(long)]
    pub(crate) strategy: Option<MatchStrategy>,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        skills,
        roster,
        resumes,
        strategy,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init_with_sink(&config.telemetry, LogSink::Stderr)?;

    let mut engine_config = config.engine_config();
    if let Some(strategy) = strategy {
        engine_config = engine_config.with_strategy(strategy);
    }
    let engine = ScoringEngine::new(engine_config);

    let mut candidates = match roster {
        Some(path) => load_roster(path)?,
        None => Vec::new(),
    };
    let intake = ResumeIntake::new();
    for path in &resumes {
        candidates.push(admit_resume(&intake, path)?);
    }

    let required: RequiredSkills = skills.iter().collect();
    info!(
        candidates = candidates.len(),
        required_skills = required.len(),
        strategy = %engine.config().strategy,
        "ranking candidates"
    );
    let results = engine.rank(&candidates, required.as_slice());

    if json {
        let rendered = serde_json::to_string_pretty(&results).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", render_results(&results));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let strategy = args.strategy.unwrap_or_default();
    let engine = ScoringEngine::new(EngineConfig::default().with_strategy(strategy));
    let required = demo_requirements();

    println!("Resume ranking demo ({strategy} matching)");
    println!(
        "Required skills: {}",
        required.iter().collect::<Vec<_>>().join(", ")
    );
    println!();

    let results = engine.rank(&demo_pool(), required.as_slice());
    print!("{}", render_results(&results));
    Ok(())
}

/// Reads a resume from disk. Only plain-text files have their body kept as notes.
fn admit_resume(intake: &ResumeIntake, path: &Path) -> Result<Candidate, AppError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
        .to_string();
    let size_bytes = std::fs::metadata(path)?.len();

    let mut upload = ResumeUpload::new(file_name, content_type);
    if upload.content_type == "text/plain" {
        upload = upload.with_content(std::fs::read_to_string(path)?);
    }
    upload.size_bytes = Some(size_bytes);

    intake
        .admit(upload)
        .map_err(|err| AppError::from(ScreeningServiceError::from(err)))
}

pub(crate) fn render_results(results: &[ScoreResult]) -> String {
    if results.is_empty() {
        return "No candidates to rank.\n".to_string();
    }

    let mut out = String::new();
    for (position, result) in results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {:>3}%  {} ({})",
            position + 1,
            result.percent(),
            result.name,
            result.id
        );
        let _ = writeln!(out, "    matched: {}", list_or_dash(&result.matched_skills));
        let _ = writeln!(out, "    missing: {}", list_or_dash(&result.missing_skills));
        if !result.notes_snippet.is_empty() {
            let _ = writeln!(out, "    notes:   {}", result.notes_snippet);
        }
    }
    out
}

fn list_or_dash(skills: &[String]) -> String {
    if skills.is_empty() {
        "-".to_string()
    } else {
        skills.join(", ")
    }
}

fn demo_requirements() -> RequiredSkills {
    ["Rust", "SQL", "Docker", "Kubernetes"].into_iter().collect()
}

fn demo_pool() -> Vec<Candidate> {
    vec![
        Candidate::new("demo-1", "Tom Becker")
            .with_notes("Frontend developer, 4 years React and TypeScript."),
        Candidate::new("demo-2", "Ines Alvarez")
            .with_skills(["rust", "postgres"])
            .with_notes(
                "Backend engineer with 8 years of Rust and SQL. \
                 Runs services on Kubernetes and Docker.",
            ),
        Candidate::new("demo-3", "Mei Chen")
            .with_skills(["docker"])
            .with_notes("DevOps engineer. 6 years managing Kubernetes clusters; some SQL reporting."),
    ]
}
