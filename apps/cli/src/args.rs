use clap::{Parser, ValueEnum};
use sinorm_quantity::NormalizeOptions;

use crate::logging::LoggingConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Normalize SI quantity expressions to base units.
#[derive(Debug, Parser)]
#[command(name = "sinorm", version, about)]
pub struct Args {
    /// Expressions such as "50 kPa"; read one per line from stdin when omitted
    pub expressions: Vec<String>,

    /// Reject input left over after a valid expression
    #[arg(long, env = "SINORM_STRICT")]
    pub strict: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "SINORM_FORMAT")]
    pub format: OutputFormat,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn", env = "SINORM_LOG")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    pub fn options(&self) -> NormalizeOptions {
        NormalizeOptions {
            strict: self.strict,
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            json: self.log_json,
        }
    }
}
