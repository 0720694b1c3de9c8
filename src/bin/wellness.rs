//! wellness CLI - Command-line interface for wellness-core
//!
//! Commands:
//! - burnout: Score a usage report
//! - diet: Build a diet plan for a body weight and budget
//! - catalog: List the food catalog
//! - quiz: Score questionnaire answers
//! - meditations: List guided meditations

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wellness_core::config::{OutputFormat as ConfigFormat, WellnessConfig, CONFIG_ENV_VAR};
use wellness_core::diet::{generate_diet_plan, DietPlanRequest};
use wellness_core::questionnaire::{score_responses, QUESTIONS};
use wellness_core::report::ReportEncoder;
use wellness_core::session::{format_clock, meditation_catalog};
use wellness_core::usage::{compute_burnout, parse_usage_metrics};
use wellness_core::{WellnessError, CRATE_VERSION};

/// wellness - Burnout scoring and diet planning from the command line
#[derive(Parser)]
#[command(name = "wellness")]
#[command(version = CRATE_VERSION)]
#[command(about = "Score digital burnout and plan mental-health friendly meals", long_about = None)]
struct Cli {
    /// Configuration file (JSON); falls back to $WELLNESS_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true)]
    output_format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a usage report and print a burnout report
    Burnout {
        /// Usage report JSON file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Build a diet plan for a body weight and daily budget
    Diet {
        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Budget for the whole day
        #[arg(long, allow_hyphen_values = true)]
        budget: f64,

        /// Food catalog JSON file (overrides the config file)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List the food catalog
    Catalog {
        /// Food catalog JSON file (overrides the config file)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Score questionnaire answers
    Quiz {
        /// Ten comma-separated answers from 1 to 5
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<u8>>,

        /// Print the questions instead of scoring
        #[arg(long)]
        list: bool,
    },

    /// List guided meditations
    Meditations,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

impl OutputFormat {
    fn from_config(value: Option<ConfigFormat>) -> Self {
        match value {
            Some(ConfigFormat::JsonPretty) => OutputFormat::JsonPretty,
            Some(ConfigFormat::Json) | None => OutputFormat::Json,
        }
    }

    fn encoder(self) -> ReportEncoder {
        match self {
            OutputFormat::Json => ReportEncoder::new(),
            OutputFormat::JsonPretty => ReportEncoder::pretty(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WellnessCliError> {
    let config = match &cli.config {
        Some(path) => WellnessConfig::load(path)?,
        None => WellnessConfig::discover()?,
    };

    init_logging(config.log_filter.as_deref());
    debug!(?config, "loaded configuration");

    let format = cli
        .output_format
        .unwrap_or_else(|| OutputFormat::from_config(config.output));
    let encoder = format.encoder();

    match cli.command {
        Commands::Burnout { input } => cmd_burnout(&input, &encoder),
        Commands::Diet {
            weight,
            budget,
            catalog,
        } => cmd_diet(weight, budget, catalog, &config, &encoder),
        Commands::Catalog { catalog } => cmd_catalog(catalog, &config, &encoder),
        Commands::Quiz { answers, list } => cmd_quiz(answers, list, &encoder),
        Commands::Meditations => cmd_meditations(&encoder),
    }
}

fn init_logging(config_filter: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(config_filter.unwrap_or("warn"))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn cmd_burnout(input: &Path, encoder: &ReportEncoder) -> Result<(), WellnessCliError> {
    let json = read_input(input)?;
    let metrics = parse_usage_metrics(&json)?;
    let result = compute_burnout(&metrics)?;

    debug!(score = result.score, "burnout scored");

    let report = encoder.burnout(&result, metrics.observed_on);
    println!("{}", encoder.to_json(&report)?);
    Ok(())
}

fn cmd_diet(
    weight: f64,
    budget: f64,
    catalog: Option<PathBuf>,
    config: &WellnessConfig,
    encoder: &ReportEncoder,
) -> Result<(), WellnessCliError> {
    let catalog = resolve_catalog(catalog, config)?;
    let request = DietPlanRequest::new(weight, budget);
    let result = generate_diet_plan(&request, &catalog)?;

    if result.is_empty() {
        debug!(
            calorie_target = result.calorie_target,
            "no foods available within this budget and calorie range"
        );
    }

    println!("{}", encoder.to_json(&encoder.diet(&result))?);
    Ok(())
}

fn cmd_catalog(
    catalog: Option<PathBuf>,
    config: &WellnessConfig,
    encoder: &ReportEncoder,
) -> Result<(), WellnessCliError> {
    let catalog = resolve_catalog(catalog, config)?;
    println!("{}", encoder.to_json(&catalog)?);
    Ok(())
}

fn cmd_quiz(
    answers: Option<Vec<u8>>,
    list: bool,
    encoder: &ReportEncoder,
) -> Result<(), WellnessCliError> {
    if list {
        println!("{}", encoder.to_json(&QUESTIONS)?);
        return Ok(());
    }

    let answers = answers.ok_or(WellnessCliError::MissingAnswers)?;
    let result = score_responses(&answers)?;
    println!("{}", encoder.to_json(&encoder.questionnaire(&result))?);
    Ok(())
}

fn cmd_meditations(encoder: &ReportEncoder) -> Result<(), WellnessCliError> {
    #[derive(Serialize)]
    struct MeditationListing {
        id: u32,
        title: String,
        duration: String,
        steps: Vec<String>,
    }

    let listings: Vec<MeditationListing> = meditation_catalog()
        .into_iter()
        .map(|m| MeditationListing {
            id: m.id,
            duration: format_clock(m.duration_minutes * 60),
            title: m.title,
            steps: m.steps,
        })
        .collect();

    println!("{}", encoder.to_json(&listings)?);
    Ok(())
}

fn resolve_catalog(
    override_path: Option<PathBuf>,
    config: &WellnessConfig,
) -> Result<Vec<wellness_core::FoodItem>, WellnessCliError> {
    let config = match override_path {
        Some(path) => WellnessConfig {
            catalog_path: Some(path),
            ..config.clone()
        },
        None => config.clone(),
    };
    Ok(config.load_catalog()?)
}

fn read_input(input: &Path) -> Result<String, WellnessCliError> {
    if input.as_os_str() == "-" {
        if atty::is(atty::Stream::Stdin) {
            return Err(WellnessCliError::NoInput);
        }
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug)]
enum WellnessCliError {
    Io(io::Error),
    Compute(WellnessError),
    NoInput,
    MissingAnswers,
}

impl From<io::Error> for WellnessCliError {
    fn from(e: io::Error) -> Self {
        WellnessCliError::Io(e)
    }
}

impl From<WellnessError> for WellnessCliError {
    fn from(e: WellnessError) -> Self {
        WellnessCliError::Compute(e)
    }
}

#[derive(Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WellnessCliError> for CliError {
    fn from(e: WellnessCliError) -> Self {
        match e {
            WellnessCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            WellnessCliError::Compute(e @ WellnessError::InvalidInput(_)) => CliError {
                code: "INVALID_INPUT".to_string(),
                message: e.to_string(),
                hint: Some(
                    "Usage values must be non-negative and body weight positive".to_string(),
                ),
            },
            WellnessCliError::Compute(e @ WellnessError::ConfigError(_)) => CliError {
                code: "CONFIG_ERROR".to_string(),
                message: e.to_string(),
                hint: Some(format!("Check the file passed via --config or {}", CONFIG_ENV_VAR)),
            },
            WellnessCliError::Compute(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax and field names".to_string()),
            },
            WellnessCliError::NoInput => CliError {
                code: "NO_INPUT".to_string(),
                message: "No input on stdin".to_string(),
                hint: Some(
                    "Pipe a usage report into the command or pass --input <file>".to_string(),
                ),
            },
            WellnessCliError::MissingAnswers => CliError {
                code: "MISSING_ANSWERS".to_string(),
                message: "No answers given".to_string(),
                hint: Some("Pass --answers 3,4,2,... or --list to see the questions".to_string()),
            },
        }
    }
}
