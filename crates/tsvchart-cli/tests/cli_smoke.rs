use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

const CODE: &str = "\tA\tB\nx\t1\t2\ny\t3\t4\n\nwidth: 700\nx.title: Amount\n";

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("tsvchart-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn parse_tsv_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", CODE)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("tsvchart-cli"))
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let out = String::from_utf8(output.stdout)?;
    let v: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(
        v,
        serde_json::json!({
            "data": {
                "categories": ["x", "y"],
                "series": [{"name": "A", "data": ["1", "3"]}, {"name": "B", "data": ["2", "4"]}]
            },
            "options": {"chart": {"width": 700}, "xAxis": {"title": "Amount"}}
        })
    );
    Ok(())
}

#[test]
fn language_adds_chart_type() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", CODE)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("tsvchart-cli"))
        .args(["--language", "chart:line"])
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(v["chartType"], "line");
    Ok(())
}

#[test]
fn unknown_language_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", CODE)?;

    Command::new(assert_cmd::cargo::cargo_bin!("tsvchart-cli"))
        .args(["--language", "chart:radar"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid chart data"));
    Ok(())
}

#[test]
fn strict_reports_line() -> Result<(), Box<dyn std::error::Error>> {
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "A\tB\n1\n")?;

    Command::new(assert_cmd::cargo::cargo_bin!("tsvchart-cli"))
        .arg("--strict")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("syntax at line 2"));
    Ok(())
}

#[test]
fn encode_json_to_tsv() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"{"data": {"categories": ["x"], "series": [{"name": "A", "data": ["1"]}]}, "options": {"yAxis": {"max": 9000}}}"#;
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    Command::new(assert_cmd::cargo::cargo_bin!("tsvchart-cli"))
        .arg("--encode")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("\tA\nx\t1\n\ny.max: 9000\n");
    Ok(())
}
