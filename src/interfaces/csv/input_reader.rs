use crate::domain::input::CommissionInput;
use crate::error::{CommissionError, Result};
use std::io::Read;

/// Reads commission inputs from a CSV source, one period per row.
///
/// Headers may use the camelCase field names or their snake_case aliases.
pub struct InputReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InputReader<R> {
    /// Creates a new `InputReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes inputs.
    pub fn inputs(self) -> impl Iterator<Item = Result<CommissionInput>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CommissionError::from))
    }
}
