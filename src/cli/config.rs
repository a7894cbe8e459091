use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-transfer",
    version,
    about = "Copy and coerce values between named form controls"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: form-transfer.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append a JSONL trace of executed steps to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy one control's value to another within a page snapshot
    Copy {
        /// Page snapshot file (JSON or YAML)
        #[arg(long)]
        snapshot: String,

        /// Source container selector (#id, .class, *)
        #[arg(long)]
        from: String,

        /// Destination container selector
        #[arg(long)]
        to: String,

        /// Source control name
        #[arg(long)]
        name: String,

        /// Destination control name (defaults to --name)
        #[arg(long)]
        to_name: Option<String>,

        /// Write to every destination control matching the name
        #[arg(long)]
        allow_multiple: bool,

        /// Where to write the updated snapshot (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Write a literal value to a control within a page snapshot
    Set {
        #[arg(long)]
        snapshot: String,

        /// Destination container selector
        #[arg(long)]
        to: String,

        /// Destination control name
        #[arg(long)]
        name: String,

        /// Value; parsed as JSON (true, 42, "x") and kept as text otherwise
        #[arg(long)]
        value: String,

        /// Never parse --value as JSON
        #[arg(long)]
        raw: bool,

        #[arg(long)]
        allow_multiple: bool,

        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run sync plans from YAML files against a snapshot
    Run {
        /// Path to a plan YAML file or a directory of plans
        #[arg(long)]
        plan: String,

        #[arg(long)]
        snapshot: String,

        /// Where to write the updated snapshot (default: not written)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-transfer.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub transfer: TransferConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Default for steps and commands that do not say otherwise
    #[serde(default)]
    pub allow_multiple: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-transfer.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Trace file: CLI flag first, then config.
pub fn resolve_trace_path<'a>(
    cli_trace: Option<&'a str>,
    config: &'a AppConfig,
) -> Option<&'a str> {
    cli_trace.or(config.trace.path.as_deref())
}

/// Map `-v` count to a tracing filter directive.
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
