pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_time_format, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub const DEFAULT_GREET_NAME: &str = "World";
pub const DEFAULT_FAREWELL_NAME: &str = "Alice";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Resolved greeting configuration, after defaults, file values, and CLI
/// overrides are merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingSettings {
    pub greet_name: String,
    pub farewell_name: String,
    pub time_format: String,
}

impl Default for GreetingSettings {
    fn default() -> Self {
        Self {
            greet_name: DEFAULT_GREET_NAME.to_string(),
            farewell_name: DEFAULT_FAREWELL_NAME.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl ConfigProvider for GreetingSettings {
    fn greet_name(&self) -> &str {
        &self.greet_name
    }

    fn farewell_name(&self) -> &str {
        &self.farewell_name
    }

    fn time_format(&self) -> &str {
        &self.time_format
    }
}

impl Validate for GreetingSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("greeting.greet_name", &self.greet_name)?;
        validate_non_empty_string("greeting.farewell_name", &self.farewell_name)?;
        validate_time_format("greeting.time_format", &self.time_format)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-calc")]
#[command(about = "A small command line calculator")]
pub struct CliConfig {
    #[command(subcommand)]
    pub operation: OperationCommand,

    /// Output format for the result
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places used when rendering the result (display only)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum OperationCommand {
    /// Add two numbers
    #[command(allow_negative_numbers = true)]
    Add { a: f64, b: f64 },
    /// Subtract the second number from the first
    #[command(allow_negative_numbers = true)]
    Subtract { a: f64, b: f64 },
    /// Multiply two numbers
    #[command(allow_negative_numbers = true)]
    Multiply { a: f64, b: f64 },
    /// Divide the first number by the second
    #[command(allow_negative_numbers = true)]
    Divide { a: f64, b: f64 },
    /// Raise a base to an exponent
    #[command(allow_negative_numbers = true)]
    Power { base: f64, exponent: f64 },
    /// Take the square root of a number
    #[command(allow_negative_numbers = true)]
    Sqrt { value: f64 },
}

#[cfg(feature = "cli")]
impl OperationCommand {
    pub fn into_parts(self) -> (crate::core::Operation, Vec<f64>) {
        use crate::core::Operation;
        match self {
            OperationCommand::Add { a, b } => (Operation::Add, vec![a, b]),
            OperationCommand::Subtract { a, b } => (Operation::Subtract, vec![a, b]),
            OperationCommand::Multiply { a, b } => (Operation::Multiply, vec![a, b]),
            OperationCommand::Divide { a, b } => (Operation::Divide, vec![a, b]),
            OperationCommand::Power { base, exponent } => (Operation::Power, vec![base, exponent]),
            OperationCommand::Sqrt { value } => (Operation::SquareRoot, vec![value]),
        }
    }
}
