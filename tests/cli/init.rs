use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["open"], "<%=");
    assert_eq!(parsed["close"], "%>");
    assert_eq!(parsed["indent"], 2);

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .formgenrc.json\n");
    assert!(test.root().join(".formgenrc.json").exists());

    let content = test.read_file(".formgenrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".formgenrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: .formgenrc.json already exists\n");
    assert_eq!(test.read_file(".formgenrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("t.ejs", "<%= metadata.author %>")?;

    let output = test.schema_command().args(["--template", "t.ejs"]).output()?;
    assert!(
        output.status.success(),
        "Schema command should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}
