//! Application layer: the commission engine and the form state that drives it.
//!
//! `CommissionEngine` holds the business rules as a pure computation.
//! `CommissionForm` is the caller that owns the current input and invokes the
//! engine explicitly after every edit.

pub mod engine;
pub mod form;
