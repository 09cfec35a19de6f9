use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_non_numeric_cells_coerce_to_zero() {
    let file = common::csv_file(&[&[
        "20", "500", "n/a", "ten", "5", "-2", "", "1", "1", "600", "NaN", "inf", "3",
    ]])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("commission"));
    cmd.arg("batch").arg(file.path());

    // Only plans55 count: 5 of 20 = 25%. The accessory goal still opens the gate.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "1,25.0,0% (0-70% of goal),25.00,0.00,1.00,1.00,42.00,0.00,69.00,0.00,0.00,60.00",
        ));
}

#[test]
fn test_unreadable_row_is_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "grossAddGoal,plans40").unwrap();
    writeln!(file, "20,10").unwrap();
    file.write_all(b"20,\xff\xfe\n").unwrap();
    writeln!(file, "20,20").unwrap();
    file.flush().unwrap();

    let mut cmd = Command::new(cargo_bin!("commission"));
    cmd.arg("batch").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading row 2"))
        .stdout(predicate::str::contains("1,50.0,"))
        .stdout(predicate::str::contains("3,100.0,"));
}

#[test]
fn test_huge_values_are_capped() {
    let mut cmd = Command::new(cargo_bin!("commission"));
    cmd.env_remove("COMMISSION_OUTPUT_FORMAT")
        .args(["calc", "--plans60", "1e40", "--gross-add-goal", "0.5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Performance Tier: 120% (120%+ of goal)"))
        .stdout(predicate::str::contains("Plan Commission: $6000000000000.00"));
}
