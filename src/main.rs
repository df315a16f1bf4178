use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use content_quality::config::EngineConfig;
use content_quality::input::load_units;
use content_quality::logging::{init_logging, LoggingConfig};
use content_quality::model::Enhancement;
use content_quality::quality::{ContentQualityEngine, ScoreBreakdown};
use content_quality::report::{ContentReport, JsonReportWriter, MarkdownReportWriter};
use content_quality::ui::colors::colors_supported;
use content_quality::ui::ScoreRenderer;

/// Output format for suggestions and reports
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON structured output
    #[default]
    Json,
    /// Human-readable markdown
    Markdown,
    /// Terminal text
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "content-quality")]
#[command(version)]
#[command(about = "Score service content and suggest improvements")]
struct Cli {
    /// Rubric configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable colors (also respects NO_COLOR environment variable)
    #[arg(long, global = true)]
    no_color: bool,

    /// Suppress log output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(long, short, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the quality score of each service
    Score {
        /// Content JSON file, or - for stdin
        input: PathBuf,

        /// Print score breakdowns as JSON
        #[arg(long)]
        json: bool,

        /// Exit with code 2 if any service scores below this
        #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
        min_score: Option<u8>,
    },
    /// Generate enhancement records for each service
    Suggest {
        /// Content JSON file, or - for stdin
        input: PathBuf,

        /// Output format (json, markdown, text)
        #[arg(long, short = 'f', default_value = "json", value_enum)]
        format: OutputFormat,

        /// Output file path (defaults to stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Produce a full report with breakdowns and suggestions
    Report {
        /// Content JSON file, or - for stdin
        input: PathBuf,

        /// Output format (json, markdown, text)
        #[arg(long, short = 'f', default_value = "json", value_enum)]
        format: OutputFormat,

        /// Output file path (defaults to stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// Exit codes for the CLI
mod exit_codes {
    use std::process::ExitCode;

    /// Everything ran and passed
    pub fn success() -> ExitCode {
        ExitCode::SUCCESS
    }

    /// Input, configuration or output error
    pub fn error() -> ExitCode {
        ExitCode::from(1)
    }

    /// At least one service scored below `--min-score`
    pub fn below_threshold() -> ExitCode {
        ExitCode::from(2)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreEntry<'a> {
    service_id: &'a str,
    score: u8,
    breakdown: ScoreBreakdown,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_color = !cli.no_color && colors_supported();

    init_logging(LoggingConfig::from_flags(cli.verbose, cli.quiet).with_ansi(use_color));

    match run(&cli, use_color) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            exit_codes::error()
        }
    }
}

fn run(cli: &Cli, use_color: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let engine = build_engine(cli.config.as_deref())?;
    let renderer = ScoreRenderer::new().with_color(use_color);

    match &cli.command {
        Commands::Score {
            input,
            json,
            min_score,
        } => run_score(&engine, &renderer, input, *json, *min_score),
        Commands::Suggest {
            input,
            format,
            output,
        } => {
            run_suggest(&engine, &renderer, input, *format, output.as_deref())?;
            Ok(exit_codes::success())
        }
        Commands::Report {
            input,
            format,
            output,
        } => {
            run_report(&engine, &renderer, input, *format, output.as_deref())?;
            Ok(exit_codes::success())
        }
    }
}

fn build_engine(config: Option<&Path>) -> Result<ContentQualityEngine, Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => {
            tracing::info!("Using rubric from {}", path.display());
            EngineConfig::load(path)?
        }
        None => EngineConfig::from_env()?,
    };
    Ok(ContentQualityEngine::new(config))
}

fn run_score(
    engine: &ContentQualityEngine,
    renderer: &ScoreRenderer,
    input: &Path,
    json: bool,
    min_score: Option<u8>,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let units = load_units(input)?;
    let report = ContentReport::new(engine.analyze_all(&units));

    if json {
        let entries: Vec<ScoreEntry> = report
            .analyses
            .iter()
            .map(|analysis| ScoreEntry {
                service_id: &analysis.service_id,
                score: analysis.breakdown.total,
                breakdown: analysis.breakdown,
            })
            .collect();
        println!("{}", JsonReportWriter::to_json_string(&entries)?);
    } else {
        for analysis in &report.analyses {
            println!(
                "{}",
                renderer.render_score_line(&analysis.service_id, analysis.breakdown.total)
            );
        }
    }

    if let Some(threshold) = min_score {
        let failing: Vec<&str> = report
            .below(threshold)
            .into_iter()
            .map(|a| a.service_id.as_str())
            .collect();

        if !failing.is_empty() {
            eprintln!(
                "{} service(s) below minimum score {}: {}",
                failing.len(),
                threshold,
                failing.join(", ")
            );
            return Ok(exit_codes::below_threshold());
        }
    }

    Ok(exit_codes::success())
}

fn run_suggest(
    engine: &ContentQualityEngine,
    renderer: &ScoreRenderer,
    input: &Path,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let units = load_units(input)?;
    let enhancements: Vec<Enhancement> = units
        .iter()
        .map(|u| engine.generate_suggestions(u))
        .collect();

    match (format, output) {
        (OutputFormat::Json, Some(path)) => {
            JsonReportWriter::write_to_file(&enhancements, path)?;
            tracing::info!("Wrote {}", path.display());
            Ok(())
        }
        (OutputFormat::Json, None) => emit(&JsonReportWriter::to_json_string(&enhancements)?, None),
        (OutputFormat::Markdown, _) => emit(
            &MarkdownReportWriter::enhancements_to_markdown(&enhancements),
            output,
        ),
        (OutputFormat::Text, _) => emit(
            &enhancements
                .iter()
                .map(|e| renderer.render_enhancement(e))
                .collect::<Vec<_>>()
                .join("\n"),
            output,
        ),
    }
}

fn run_report(
    engine: &ContentQualityEngine,
    renderer: &ScoreRenderer,
    input: &Path,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let units = load_units(input)?;
    let analyses = engine.analyze_all(&units);
    let report = ContentReport::new(analyses).with_duration_ms(start.elapsed().as_millis() as u64);

    tracing::info!(
        "Analyzed {} service(s), average score {:.1}",
        report.metadata.unit_count,
        report.metadata.average_score
    );
    if let Some(weakest) = report.weakest() {
        tracing::info!(
            "Lowest score: {} ({}/100)",
            weakest.service_id,
            weakest.breakdown.total
        );
    }

    match (format, output) {
        (OutputFormat::Json, Some(path)) => {
            JsonReportWriter::write_to_file(&report, path)?;
            tracing::info!("Wrote {}", path.display());
            Ok(())
        }
        (OutputFormat::Markdown, Some(path)) => {
            MarkdownReportWriter::write_to_file(&report, path)?;
            tracing::info!("Wrote {}", path.display());
            Ok(())
        }
        (OutputFormat::Json, None) => emit(&JsonReportWriter::to_json_string(&report)?, None),
        (OutputFormat::Markdown, None) => {
            emit(&MarkdownReportWriter::to_markdown_string(&report), None)
        }
        (OutputFormat::Text, _) => emit(
            &report
                .analyses
                .iter()
                .map(|a| renderer.render_analysis(a))
                .collect::<Vec<_>>()
                .join("\n"),
            output,
        ),
    }
}

/// Write to the output file, or stdout when none is given.
fn emit(rendered: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}
