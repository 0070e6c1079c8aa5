//! CLI argument definitions for `preclinvar`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use pcv_ingest::Delimiter;
use pcv_map::SubmissionOptions;
use pcv_validate::SchemaKind;

#[derive(Parser)]
#[command(
    name = "preclinvar",
    version,
    about = "Prepare ClinVar submissions from Variant and CaseData files",
    long_about = "Convert Variant and CaseData spreadsheets (CSV or TSV) into a ClinVar\n\
                  Submission API document, validate it against the submission schema,\n\
                  and send it to the API for a dry run, a test submission or a live submission."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Show cell values in logs and diagnostics (they may describe patients).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a Variant and a CaseData file into a submission document.
    Convert(ConvertArgs),

    /// Validate a submission document against the local schema.
    Validate(ValidateArgs),

    /// Send a submission to the live API with dry-run=true.
    DryRun(RemoteArgs),

    /// Send a submission to the API test service.
    TestSubmit(RemoteArgs),

    /// Submit to the live ClinVar service.
    Submit(RemoteArgs),

    /// List the controlled vocabularies used during conversion.
    Terms,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Input files; names must contain "Variant" or "CaseData".
    #[arg(value_name = "FILES", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Write the document here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field separator of the input files.
    #[arg(long = "delimiter", value_enum, default_value = "auto")]
    pub delimiter: DelimiterArg,

    #[command(flatten)]
    pub schema: SchemaArgs,

    #[command(flatten)]
    pub submission: SubmissionArgs,
}

#[derive(Args)]
pub struct SchemaArgs {
    /// Schema to validate against.
    #[arg(long = "schema", value_enum, default_value = "germline")]
    pub schema: SchemaArg,
}

#[derive(Args)]
pub struct SubmissionArgs {
    /// Name of the submission batch.
    #[arg(long = "submission-name", value_name = "NAME")]
    pub submission_name: Option<String>,

    /// Release status, e.g. "public" or "hold until published".
    #[arg(long = "release-status", value_name = "STATUS")]
    pub release_status: Option<String>,

    /// Citation database of batch assertion criteria (requires --assertion-id).
    #[arg(long = "assertion-db", value_name = "DB", requires = "assertion_id")]
    pub assertion_db: Option<String>,

    /// Citation id of batch assertion criteria (requires --assertion-db).
    #[arg(long = "assertion-id", value_name = "ID", requires = "assertion_db")]
    pub assertion_id: Option<String>,

    /// Genome assembly of coordinate-based variants, e.g. GRCh38.
    #[arg(long = "assembly", value_name = "ASSEMBLY")]
    pub assembly: Option<String>,
}

impl From<&SubmissionArgs> for SubmissionOptions {
    fn from(args: &SubmissionArgs) -> Self {
        Self {
            submission_name: args.submission_name.clone(),
            release_status: args.release_status.clone(),
            assertion_db: args.assertion_db.clone(),
            assertion_id: args.assertion_id.clone(),
            assembly: args.assembly.clone(),
        }
    }
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Submission document (JSON).
    #[arg(value_name = "JSON")]
    pub document: PathBuf,

    #[command(flatten)]
    pub schema: SchemaArgs,
}

#[derive(Args)]
pub struct RemoteArgs {
    /// Submission document (JSON).
    #[arg(value_name = "JSON")]
    pub document: PathBuf,

    /// Submission portal API key (64 letters and digits).
    #[arg(
        long = "api-key",
        env = "CLINVAR_API_KEY",
        hide_env_values = true,
        value_name = "KEY"
    )]
    pub api_key: String,

    #[command(flatten)]
    pub schema: SchemaArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    Auto,
    Csv,
    Tsv,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Auto => Self::Auto,
            DelimiterArg::Csv => Self::Comma,
            DelimiterArg::Tsv => Self::Tab,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaArg {
    Germline,
    Somatic,
}

impl From<SchemaArg> for SchemaKind {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Germline => Self::Germline,
            SchemaArg::Somatic => Self::Somatic,
        }
    }
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
