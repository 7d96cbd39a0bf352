use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("toon-codec-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn encode_emits_tabular_header() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"{"users":[{"id":1,"name":"Alice"},{"id":2,"name":"Bob"}]}"#;
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    Command::new(assert_cmd::cargo::cargo_bin!("toon-codec-cli"))
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("users[2]{id,name}:"))
        .stdout(predicate::str::contains("1,Alice"));
    Ok(())
}

#[test]
fn decode_toon_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let input = "a: 2\nlist[2]: 1,2\n";
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("toon-codec-cli"))
        .arg("--decode")
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_str(&String::from_utf8(output.stdout)?)?;
    assert_eq!(v, serde_json::json!({"a": 2, "list": [1, 2]}));
    Ok(())
}

#[test]
fn strict_decode_fails_on_length_mismatch() -> Result<(), Box<dyn std::error::Error>> {
    let input = "rows[3]{a,b}:\n  1,2\n  3,4\n";
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    Command::new(assert_cmd::cargo::cargo_bin!("toon-codec-cli"))
        .arg("--decode")
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("declares 3"));
    Ok(())
}

#[test]
fn lenient_decode_recovers() -> Result<(), Box<dyn std::error::Error>> {
    let input = "rows[3]{a,b}:\n  1,2\n  3,4\n";
    let mut tmp = NamedTempFile::new()?;
    write!(tmp, "{}", input)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("toon-codec-cli"))
        .arg("--decode")
        .arg("--lenient")
        .arg(tmp.path())
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_str(&String::from_utf8(output.stdout)?)?;
    assert_eq!(
        v,
        serde_json::json!({"rows": [{"a":1,"b":2},{"a":3,"b":4}]})
    );
    Ok(())
}
