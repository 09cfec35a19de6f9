#![allow(dead_code)]

use commission_calc::domain::input::CommissionInput;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: [&str; 13] = [
    "grossAddGoal",
    "accessoryGoal",
    "plans30",
    "plans40",
    "plans55",
    "plans60",
    "upgrades",
    "autoPayEnabled",
    "protectEnabled",
    "accessoriesValue",
    "grossAddsWith40Plus",
    "pppAccessoryRevenue",
    "aiaCount",
];

pub fn scenario_a() -> CommissionInput {
    CommissionInput {
        gross_add_goal: dec!(20),
        accessory_goal: dec!(500),
        plans40: dec!(10),
        plans55: dec!(5),
        upgrades: dec!(2),
        auto_pay_enabled: dec!(1),
        protect_enabled: dec!(1),
        accessories_value: dec!(600),
        gross_adds_with_40_plus: dec!(10),
        ppp_accessory_revenue: dec!(100),
        aia_count: dec!(3),
        ..Default::default()
    }
}

/// Dollar amount with cents, e.g. 123.45.
fn dollars<R: Rng>(rng: &mut R, max_dollars: i64) -> Decimal {
    Decimal::new(rng.gen_range(0..max_dollars * 100), 2)
}

fn count<R: Rng>(rng: &mut R, max: i64) -> Decimal {
    Decimal::from(rng.gen_range(0..=max))
}

/// A plausible month of metrics. Goals may be zero.
pub fn random_input<R: Rng>(rng: &mut R) -> CommissionInput {
    CommissionInput {
        gross_add_goal: count(rng, 40),
        accessory_goal: dollars(rng, 1500),
        plans30: count(rng, 15),
        plans40: count(rng, 15),
        plans55: count(rng, 15),
        plans60: count(rng, 15),
        upgrades: count(rng, 30),
        auto_pay_enabled: count(rng, 30),
        protect_enabled: count(rng, 30),
        accessories_value: dollars(rng, 2000),
        gross_adds_with_40_plus: count(rng, 30),
        ppp_accessory_revenue: dollars(rng, 1000),
        aia_count: count(rng, 10),
    }
}

/// Writes `rows` under the standard header into a temporary CSV file.
pub fn csv_file(rows: &[&[&str]]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(file.as_file_mut());
        wtr.write_record(HEADER)?;
        for row in rows {
            wtr.write_record(*row)?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}
