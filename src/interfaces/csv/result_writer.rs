use crate::domain::money::Money;
use crate::domain::result::CommissionResult;
use crate::error::Result;
use crate::interfaces::display::{
    CURRENCY_PLACES, MULTIPLIER_PLACES, PERCENTAGE_PLACES, round_half_up,
};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultRow {
    row: usize,
    gross_add_percentage: Decimal,
    performance_tier: &'static str,
    plan_commission: Decimal,
    upgrade_commission: Decimal,
    auto_pay_commission: Decimal,
    protect_commission: Decimal,
    accessories_commission: Decimal,
    ppp_commission: Decimal,
    subtotal: Decimal,
    performance_multiplier: Decimal,
    total_commission: Decimal,
    aia_commission: Decimal,
}

impl ResultRow {
    fn new(row: usize, result: &CommissionResult) -> Self {
        let money = |m: Money| round_half_up(m.value(), CURRENCY_PLACES);
        Self {
            row,
            gross_add_percentage: round_half_up(result.gross_add_percentage, PERCENTAGE_PLACES),
            performance_tier: result.performance_tier_label(),
            plan_commission: money(result.plan_commission),
            upgrade_commission: money(result.upgrade_commission),
            auto_pay_commission: money(result.auto_pay_commission),
            protect_commission: money(result.protect_commission),
            accessories_commission: money(result.accessories_commission),
            ppp_commission: money(result.ppp_commission),
            subtotal: money(result.subtotal),
            performance_multiplier: round_half_up(result.performance_multiplier, MULTIPLIER_PLACES),
            total_commission: money(result.total_commission),
            aia_commission: money(result.aia_commission),
        }
    }
}

/// Writes one display-rounded CSV row per computed result.
///
/// `row` is the 1-based position of the input in the source file, so output
/// lines can be matched back even when unreadable rows were skipped.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, row: usize, result: &CommissionResult) -> Result<()> {
        self.writer.serialize(ResultRow::new(row, result))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
