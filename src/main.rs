use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use kira_thresholdqc::input::{
    DEFAULT_LABEL_COLUMN, DEFAULT_SCORE_COLUMN, InputError, LoadOptions, load_input,
};
use kira_thresholdqc::logging;
use kira_thresholdqc::model::request::{
    DEFAULT_SWEEP_STEP, DEFAULT_THRESHOLD, EvalRequest, ModelMode, RocSource,
};
use kira_thresholdqc::pipeline::stage4_report::{build_summary, write_reports, write_sweep};
use kira_thresholdqc::pipeline::{MetricsError, evaluate, sweep};
use kira_thresholdqc::report::ReportError;
use kira_thresholdqc::report::text::render_report_text;
use kira_thresholdqc::report::tsv::write_sweep_tsv;

#[derive(Debug, Parser)]
#[command(
    name = "kira-thresholdqc",
    version,
    about = "Confusion matrix, precision, recall, ROC and AUC for binary classifier scores"
)]
struct Cli {
    /// Only log warnings and errors (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one model/threshold setting.
    Run(RunArgs),
    /// Evaluate probabilities mode across a threshold grid.
    Sweep(SweepArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// CSV file with label and score columns (.gz accepted).
    #[arg(long)]
    input: PathBuf,

    #[arg(long, default_value = DEFAULT_LABEL_COLUMN)]
    label_column: String,

    #[arg(long, default_value = DEFAULT_SCORE_COLUMN)]
    score_column: String,

    /// Field delimiter: a single ASCII character, or `tab`.
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[command(flatten)]
    input: InputArgs,

    #[arg(long, value_enum, default_value_t = ModelMode::Naive)]
    model: ModelMode,

    /// Decision threshold in [0, 1]; used by the probabilities model only.
    #[arg(long, allow_hyphen_values = true)]
    threshold: Option<f64>,

    #[arg(long, value_enum, default_value_t = RocSource::Scores)]
    roc_source: RocSource,

    /// Directory for summary.json, report.txt and TSV outputs.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct SweepArgs {
    #[command(flatten)]
    input: InputArgs,

    #[arg(long, default_value_t = DEFAULT_SWEEP_STEP)]
    step: f64,

    /// Directory for threshold_sweep.tsv; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = logging::init(cli.quiet) {
        eprintln!("{err}");
    }
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), RunError> {
    match command {
        Command::Run(args) => run_evaluate(args),
        Command::Sweep(args) => run_sweep(args),
    }
}

fn run_evaluate(args: RunArgs) -> Result<(), RunError> {
    let request = build_request(&args)?;
    let bundle = load_input(&args.input.input, &args.input.load_options())?;

    let evaluation = evaluate(&bundle.labels, &bundle.scores, &request)?;
    let summary = build_summary(&bundle, &evaluation);

    if let Some(out_dir) = &args.out {
        write_reports(&bundle, &evaluation, &summary, out_dir)?;
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render_report_text(&summary).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_sweep(args: SweepArgs) -> Result<(), RunError> {
    let bundle = load_input(&args.input.input, &args.input.load_options())?;
    let rows = sweep(&bundle.labels, &bundle.scores, args.step)?;

    match &args.out {
        Some(out_dir) => {
            write_sweep(&rows, out_dir)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_sweep_tsv(&mut stdout, &rows)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn build_request(args: &RunArgs) -> Result<EvalRequest, MetricsError> {
    if args.model == ModelMode::Naive && args.threshold.is_some() {
        tracing::warn!("--threshold is ignored by the naive model");
    }
    EvalRequest::new(
        args.model,
        args.threshold.unwrap_or(DEFAULT_THRESHOLD),
        args.roc_source,
    )
}

impl InputArgs {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            label_column: self.label_column.clone(),
            score_column: self.score_column.clone(),
            delimiter: self.delimiter,
        }
    }
}

fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let bytes = raw.as_bytes();
            if bytes.len() == 1 && bytes[0].is_ascii() {
                Ok(bytes[0])
            } else {
                Err(format!(
                    "delimiter must be a single ASCII character, got '{}'",
                    raw
                ))
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
