//! Presentation and file formats around the engine.

pub mod csv;
pub mod display;
pub mod report;
