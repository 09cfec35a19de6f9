//! Configuration for the commission calculator.
//!
//! Starting goals and the default output format come from environment
//! variables, falling back to the values the entry form has always opened
//! with. Command-line flags override anything set here.

use crate::domain::input::{CommissionInput, coerce};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_GROSS_ADD_GOAL: Decimal = dec!(20);
pub const DEFAULT_ACCESSORY_GOAL: Decimal = dec!(500);

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labelled report, as shown on the calculator screen.
    #[default]
    Text,
    /// Input and full-precision result as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "human" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Gross-add goal a fresh form starts with.
    pub gross_add_goal: Decimal,
    /// Accessory revenue goal a fresh form starts with.
    pub accessory_goal: Decimal,
    pub output_format: OutputFormat,
}

impl CalculatorConfig {
    /// Reads `COMMISSION_GROSS_ADD_GOAL`, `COMMISSION_ACCESSORY_GOAL` and
    /// `COMMISSION_OUTPUT_FORMAT`, using the defaults for anything unset.
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    ///
    /// Goal values go through the same coercion as form input, so an
    /// unparseable value yields a zero goal rather than an error.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            gross_add_goal: lookup("COMMISSION_GROSS_ADD_GOAL")
                .map(|raw| coerce(&raw))
                .unwrap_or(DEFAULT_GROSS_ADD_GOAL),
            accessory_goal: lookup("COMMISSION_ACCESSORY_GOAL")
                .map(|raw| coerce(&raw))
                .unwrap_or(DEFAULT_ACCESSORY_GOAL),
            output_format: lookup("COMMISSION_OUTPUT_FORMAT")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// The input a fresh form opens with: the configured goals, everything else zero.
    pub fn starting_input(&self) -> CommissionInput {
        CommissionInput::with_goals(self.gross_add_goal, self.accessory_goal)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            gross_add_goal: DEFAULT_GROSS_ADD_GOAL,
            accessory_goal: DEFAULT_ACCESSORY_GOAL,
            output_format: OutputFormat::Text,
        }
    }
}
