use clap::Args;
use micro_decision::analysis::batch::{BatchAnalyzer, BatchOutcome};
use micro_decision::analysis::router::CatalogView;
use micro_decision::analysis::{AnalysisResult, AnalyzeRequest, NumericField};
use micro_decision::analyze_request;
use micro_decision::config::AppConfig;
use micro_decision::error::AppError;
use micro_decision::telemetry;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Decision identifier, e.g. D1 or G3
    #[arg(long)]
    pub(crate) decision_id: String,
    /// Target role the habit is measured against
    #[arg(long)]
    pub(crate) dream_job: Option<String>,
    /// Repetitions per day (defaults to 1)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) frequency: Option<i64>,
    /// Number of days the habit is kept (defaults to 1)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) time_period: Option<i64>,
    /// Print the raw JSON record instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

impl From<AnalyzeArgs> for AnalyzeRequest {
    fn from(args: AnalyzeArgs) -> Self {
        AnalyzeRequest {
            decision_id: Some(args.decision_id),
            dream_job: args.dream_job,
            frequency: args.frequency.map(NumericField::Integer),
            time_period: args.time_period.map(NumericField::Integer),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with decision_id,dream_job,frequency,time_period columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Where to write the results (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

/// Logs go to stderr; stdout carries the command output.
pub(crate) fn init_command_telemetry() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_stderr(&config.telemetry)?;
    Ok(())
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let json = args.json;
    let result = analyze_request(args.into())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_analysis(&result);
    }
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = CatalogView::build();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("Decisions");
    for entry in &catalog.decisions {
        println!(
            "- {} {} ({}): health {}, focus {}, career {}",
            entry.decision_id,
            entry.label,
            entry.habit_type.label(),
            entry.impact.health,
            entry.impact.focus,
            entry.impact.career
        );
    }

    println!("\nRoles");
    for role in &catalog.roles {
        let weights = role
            .requirements
            .iter()
            .map(|(dimension, weight)| format!("{dimension} {weight}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("- {}: {}", role.role, weights);
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let outcome = BatchAnalyzer::from_path(&args.input)?;
    write_outcome(&outcome, args.output)?;

    eprintln!(
        "Analyzed {} rows from {} ({} failed)",
        outcome.records.len(),
        args.input.display(),
        outcome.failed()
    );
    Ok(())
}

fn write_outcome(outcome: &BatchOutcome, output: Option<PathBuf>) -> Result<(), AppError> {
    match output {
        Some(path) => outcome.write_csv(File::create(path)?)?,
        None => outcome.write_csv(io::stdout().lock())?,
    }
    Ok(())
}

fn render_analysis(result: &AnalysisResult) {
    println!("Decision {} ({})", result.decision, result.habit_type.label());
    println!("Pattern: {}", result.pattern);
    println!(
        "Impact: health {}, focus {}, career {}",
        result.butterfly_effect.health,
        result.butterfly_effect.focus,
        result.butterfly_effect.career
    );
    println!("Butterfly intensity: {}", result.butterfly_intensity);
    println!("\n{}", result.explanation);
    println!(
        "\nDream job: {} | capability {}% (score {})",
        result.dream_job, result.capability_percent, result.capability_score
    );
    println!("Advice: {}", result.advice);
}
