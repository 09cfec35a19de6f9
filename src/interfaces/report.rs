use crate::domain::input::{CommissionInput, Field};
use crate::domain::result::CommissionResult;
use crate::interfaces::display::{currency, multiplier, percentage};
use serde::Serialize;
use std::io::{self, Write};

/// Label/value pairs in the order the calculator screen shows them.
pub fn report_lines(result: &CommissionResult) -> Vec<(&'static str, String)> {
    vec![
        ("Gross Add Goal Completion", percentage(result.gross_add_percentage)),
        ("Performance Tier", result.performance_tier_label().to_string()),
        ("Plan Commission", currency(result.plan_commission)),
        ("Upgrade Commission", currency(result.upgrade_commission)),
        ("Auto Pay Commission", currency(result.auto_pay_commission)),
        ("Protect Commission", currency(result.protect_commission)),
        ("Accessories Commission (7%)", currency(result.accessories_commission)),
        ("PPP Commission", currency(result.ppp_commission)),
        ("Subtotal", currency(result.subtotal)),
        ("Performance Multiplier", multiplier(result.performance_multiplier)),
        ("TOTAL COMMISSION", currency(result.total_commission)),
        ("AIA Commission (paid after 90 days)", currency(result.aia_commission)),
    ]
}

/// Writes the text report.
pub fn write_report<W: Write>(writer: &mut W, result: &CommissionResult) -> io::Result<()> {
    for (label, value) in report_lines(result) {
        writeln!(writer, "{label}: {value}")?;
    }
    Ok(())
}

/// Lists every entry field as `name (label): value`.
pub fn write_fields<W: Write>(writer: &mut W, input: &CommissionInput) -> io::Result<()> {
    for field in Field::ALL {
        writeln!(writer, "{} ({}): {}", field, field.label(), input.get(field))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a CommissionInput,
    result: &'a CommissionResult,
}

/// Writes the input and its full-precision result as pretty JSON.
pub fn write_json<W: Write>(
    writer: &mut W,
    input: &CommissionInput,
    result: &CommissionResult,
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &JsonReport { input, result })?;
    writeln!(writer).map_err(serde_json::Error::io)
}
