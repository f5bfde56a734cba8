use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("projectile-cli").expect("binary under test")
}

#[test]
fn simulate_prints_summary_table() {
    cli()
        .args([
            "simulate", "--v0", "20", "--angle", "45", "--height", "0", "--drag", "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("TRAJECTORY SUMMARY"))
        .stdout(predicate::str::contains("Range:"))
        .stdout(predicate::str::contains("ground contact"));
}

#[test]
fn simulate_emits_json_report() {
    let output = cli()
        .args([
            "simulate", "--v0", "20", "--angle", "45", "--height", "0", "--drag", "0.1",
            "-o", "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");
    assert_eq!(report["v0"], 20.0);
    assert_eq!(report["grounded"], true);
    assert!(report["trajectory"].as_array().unwrap().len() > 10);
}

#[test]
fn simulate_emits_csv_rows() {
    cli()
        .args([
            "simulate", "--v0", "10", "--angle", "30", "--height", "0", "--drag", "0",
            "-o", "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("time,x,y,vx,vy,speed"));
}

#[test]
fn simulate_rejects_out_of_range_angle() {
    cli()
        .args([
            "simulate", "--v0", "20", "--angle", "120", "--height", "0", "--drag", "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid parameter"));
}

#[test]
fn simulate_prompts_for_missing_values() {
    cli()
        .arg("simulate")
        .write_stdin("20\n45\n0\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TRAJECTORY SUMMARY"));
}

#[test]
fn simulate_reprompts_on_invalid_input() {
    cli()
        .arg("simulate")
        .write_stdin("not-a-number\n20\n45\n0\n0\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Please enter"));
}

#[test]
fn potential_reports_field_stats() {
    cli()
        .args(["potential", "--kind", "gravity", "-n", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("POTENTIAL FIELD: gravity"))
        .stdout(predicate::str::contains("Energy max:"));
}

#[test]
fn potential_csv_covers_the_grid() {
    let output = cli()
        .args(["potential", "--kind", "elastic", "-n", "5", "-o", "csv"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    // Header plus 5×5 samples.
    assert_eq!(text.lines().count(), 26);
    assert!(text.starts_with("x,y,energy"));
}

#[test]
fn potential_rejects_unknown_kind() {
    cli()
        .args(["potential", "--kind", "vortex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown force kind"));
}

#[test]
fn simulate_writes_trajectory_charts_png() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("charts.png");

    cli()
        .args([
            "simulate", "--v0", "20", "--angle", "45", "--height", "0", "--drag", "0.1",
        ])
        .arg("--plot")
        .arg(&png)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote trajectory charts"));

    let metadata = std::fs::metadata(&png).expect("plot file should exist");
    assert!(metadata.len() > 0, "plot file should not be empty");
}

#[test]
fn potential_writes_contour_png() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("field.png");

    cli()
        .args(["potential", "--kind", "elastic", "-n", "30"])
        .arg("--plot")
        .arg(&png)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote potential contour"));

    let metadata = std::fs::metadata(&png).expect("contour file should exist");
    assert!(metadata.len() > 0, "contour file should not be empty");
}

#[test]
fn info_lists_commands() {
    cli()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("potential"));
}

#[test]
fn help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("potential"))
        .stdout(predicate::str::contains("info"));
}
