use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

#[test]
fn test_cli_keyboard_by_card() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("order-pay"));
    cmd.write_stdin("1\n2\ncard\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Menu:"))
        .stdout(predicate::str::contains("1. Keyboard - $50"))
        .stdout(predicate::str::contains("4. Headphones - $100"))
        .stdout(predicate::str::contains(
            "Security feature applied.\nPaid 100 by card.\n",
        ));

    Ok(())
}

#[test]
fn test_cli_monitor_by_bank_transfer() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("order-pay"));
    cmd.write_stdin("3\n1\nbank_transfer\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Logging payment record.\nPaid 200 by bank transfer.\n",
        ))
        .stdout(predicate::str::contains("by card").not());

    Ok(())
}

#[test]
fn test_cli_verbose_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("order-pay"));
    cmd.arg("-v").env_remove("RUST_LOG").write_stdin("3\n1\nbank_transfer\n");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("processing order"))
        .stderr(predicate::str::contains("payment record"))
        .stdout(predicate::str::contains("processing order").not());

    Ok(())
}
