use crate::application::engine::CommissionEngine;
use crate::config::CalculatorConfig;
use crate::domain::input::{CommissionInput, Field};
use crate::domain::result::CommissionResult;
use crate::error::{CommissionError, Result};
use tracing::debug;

/// Caller-side state for an interactive calculation.
///
/// The form owns the latest input and the result derived from it. Every edit
/// goes through [`CommissionForm::edit`], which coerces the raw text, stores
/// it and recomputes the result in full before returning.
#[derive(Debug, Clone)]
pub struct CommissionForm {
    initial: CommissionInput,
    input: CommissionInput,
    result: CommissionResult,
}

impl CommissionForm {
    pub fn new(input: CommissionInput) -> Self {
        Self {
            initial: input,
            input,
            result: CommissionEngine::compute(&input),
        }
    }

    /// Opens a form with the configured goals and every metric at zero.
    pub fn with_defaults(config: &CalculatorConfig) -> Self {
        Self::new(config.starting_input())
    }

    pub fn input(&self) -> &CommissionInput {
        &self.input
    }

    pub fn result(&self) -> &CommissionResult {
        &self.result
    }

    /// Replaces one field with coerced `raw` text and recomputes.
    pub fn edit(&mut self, field: Field, raw: &str) -> &CommissionResult {
        self.input.set_raw(field, raw);
        debug!(%field, raw, value = %self.input.get(field), "field edited");
        self.recompute()
    }

    /// Applies a `field=value` edit command.
    pub fn apply(&mut self, command: &str) -> Result<&CommissionResult> {
        let (name, raw) = command
            .split_once('=')
            .ok_or_else(|| CommissionError::InvalidCommand(command.trim().to_string()))?;
        let field: Field = name.parse()?;
        Ok(self.edit(field, raw))
    }

    /// Restores the input the form was opened with.
    pub fn reset(&mut self) -> &CommissionResult {
        self.input = self.initial;
        debug!("form reset");
        self.recompute()
    }

    fn recompute(&mut self) -> &CommissionResult {
        self.result = CommissionEngine::compute(&self.input);
        &self.result
    }
}

impl Default for CommissionForm {
    fn default() -> Self {
        Self::with_defaults(&CalculatorConfig::default())
    }
}
