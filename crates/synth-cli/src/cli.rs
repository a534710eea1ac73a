//! CLI argument definitions for fhir-synth.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use synth_output::BundleType;

#[derive(Parser)]
#[command(
    name = "fhir-synth",
    version,
    about = "Synthetic FHIR data generator",
    long_about = "Generate synthetic patient record graphs as FHIR resources.\n\n\
                  Writes validated per-patient folders, bundles and an optional CSV summary,\n\
                  and re-bundles previously exported resource trees."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a single patient resource.
    CreatePatient(CreatePatientArgs),

    /// Generate a dataset of synthetic patients.
    CreateDataset(CreateDatasetArgs),

    /// Create a bundle for previously generated resources.
    Bundle(BundleArgs),
}

#[derive(Parser)]
pub struct CreatePatientArgs {
    /// Path to write the patient JSON (default: stdout).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Seed for deterministic output.
    #[arg(long = "seed")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct CreateDatasetArgs {
    /// Number of patients to generate.
    #[arg(long = "count", default_value_t = 1)]
    pub count: usize,

    /// Directory to store output.
    #[arg(long = "output", value_name = "DIR", default_value = "output")]
    pub output: PathBuf,

    /// Seed for deterministic output.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Export CSV summary as well.
    #[arg(long = "csv")]
    pub csv: bool,

    /// Observation types to generate per patient, comma separated
    /// (default: all recognized vitals).
    #[arg(long = "observations", value_name = "TYPES", value_delimiter = ',')]
    pub observations: Vec<String>,

    /// Bundle type written to every bundle.
    #[arg(long = "bundle-type", value_enum, default_value = "collection")]
    pub bundle_type: BundleTypeArg,

    /// Write single-line JSON instead of indented JSON.
    #[arg(long = "compact")]
    pub compact: bool,
}

#[derive(Parser)]
pub struct BundleArgs {
    /// Directory containing patient folders.
    #[arg(long = "input", value_name = "DIR")]
    pub input: PathBuf,

    /// Path of the bundle to write.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "output/synthetic_bundle.json"
    )]
    pub output: PathBuf,

    /// Bundle type to write.
    #[arg(long = "bundle-type", value_enum, default_value = "collection")]
    pub bundle_type: BundleTypeArg,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// CLI bundle type choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BundleTypeArg {
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
    History,
    Searchset,
    Collection,
}

impl From<BundleTypeArg> for BundleType {
    fn from(arg: BundleTypeArg) -> Self {
        match arg {
            BundleTypeArg::Document => BundleType::Document,
            BundleTypeArg::Message => BundleType::Message,
            BundleTypeArg::Transaction => BundleType::Transaction,
            BundleTypeArg::TransactionResponse => BundleType::TransactionResponse,
            BundleTypeArg::Batch => BundleType::Batch,
            BundleTypeArg::BatchResponse => BundleType::BatchResponse,
            BundleTypeArg::History => BundleType::History,
            BundleTypeArg::Searchset => BundleType::Searchset,
            BundleTypeArg::Collection => BundleType::Collection,
        }
    }
}
