use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

const RESULT_HEADER: &str = "row,grossAddPercentage,performanceTier,planCommission,\
upgradeCommission,autoPayCommission,protectCommission,accessoriesCommission,pppCommission,\
subtotal,performanceMultiplier,totalCommission,aiaCommission";

#[test]
fn test_batch_fixture() {
    let mut cmd = Command::new(cargo_bin!("commission"));
    cmd.args(["batch", "tests/fixtures/scenario_a.csv"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(RESULT_HEADER))
        .stdout(predicate::str::contains(
            "1,75.0,50% (71-80% of goal),45.00,6.00,1.00,1.00,42.00,13.00,108.00,0.50,54.00,60.00",
        ));
}

#[test]
fn test_batch_rows_are_independent() {
    let file = common::csv_file(&[
        &["20", "500", "0", "24", "0", "0", "0", "0", "0", "0", "0", "0", "0"],
        &["20", "500", "0", "10", "0", "0", "0", "0", "0", "0", "0", "0", "0"],
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("commission"));
    cmd.arg("batch").arg(file.path());

    // 24/20 = 120%: 48 * 1.2. The second row gets nothing from the first.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "1,120.0,120% (120%+ of goal),48.00,0.00,0.00,0.00,0.00,0.00,48.00,1.20,57.60,0.00",
        ))
        .stdout(predicate::str::contains(
            "2,50.0,0% (0-70% of goal),20.00,0.00,0.00,0.00,0.00,0.00,20.00,0.00,0.00,0.00",
        ));
}

#[test]
fn test_batch_snake_case_headers_and_missing_columns() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "employee, gross_add_goal, plans_55, accessories_value").unwrap();
    writeln!(file, "jordan, 10, 10, 100").unwrap();
    file.flush().unwrap();

    let mut cmd = Command::new(cargo_bin!("commission"));
    cmd.arg("batch").arg(file.path());

    // 100% of goal: multiplier 1.00 on 50 + 7.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "1,100.0,100% (81-119% of goal),50.00,0.00,0.00,0.00,7.00,0.00,57.00,1.00,57.00,0.00",
        ));
}

#[test]
fn test_batch_missing_file_fails() {
    let mut cmd = Command::new(cargo_bin!("commission"));
    cmd.args(["batch", "tests/fixtures/does_not_exist.csv"]);

    cmd.assert().failure();
}
