use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

const TEMPLATE: &str = r#"
resource "aws_s3_bucket" "<%= input.bucket.name %>" {
  bucket = "<%= input.bucket.name %>"
  region = "<%= input.region %>"
  tags = {
    Owner   = "<%= metadata.author %>"
    Created = "<%= new Date().toISOString() %>"
    Slug    = "<%= slugify(metadata.title) %>"
  }
}
<% if (input.versioning) { %>
# <%= notes %>
<% } %>
"#;

#[test]
fn test_schema_to_stdout() -> Result<()> {
    let test = CliTest::with_file("main.tf.ejs", TEMPLATE)?;

    let output = test.schema_command().args(["--template", "main.tf.ejs"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @r#"
    {
      "type": "object",
      "properties": {
        "input": {
          "type": "object",
          "title": "input",
          "properties": {
            "bucket": {
              "type": "object",
              "title": "bucket",
              "properties": {
                "name": {
                  "type": "string",
                  "title": "name"
                }
              },
              "required": []
            },
            "region": {
              "type": "string",
              "title": "region"
            }
          },
          "required": [
            "bucket",
            "region"
          ]
        },
        "metadata": {
          "type": "object",
          "title": "metadata",
          "properties": {
            "author": {
              "type": "string",
              "title": "author"
            }
          },
          "required": [
            "author"
          ]
        }
      },
      "required": [
        "input",
        "metadata"
      ]
    }
    "#);

    Ok(())
}

#[test]
fn test_schema_to_output_file() -> Result<()> {
    let test = CliTest::with_file("t.ejs", "<%= metadata.author %><%= metadata.author %>")?;

    let output = test
        .schema_command()
        .args(["--template", "t.ejs", "--output", "schema.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        format!(
            "Form schema written to: {}\n",
            test.root().join("schema.json").display()
        )
    );

    let written: Value = serde_json::from_str(&test.read_file("schema.json")?)?;
    assert_eq!(
        written,
        json!({
            "type": "object",
            "properties": {
                "metadata": {
                    "type": "object",
                    "title": "metadata",
                    "properties": {"author": {"type": "string", "title": "author"}},
                    "required": ["author"]
                }
            },
            "required": ["metadata"]
        })
    );

    Ok(())
}

#[test]
fn test_schema_no_expressions() -> Result<()> {
    let test = CliTest::with_file("plain.txt", "plain text, no expressions")?;

    let output = test.schema_command().args(["--template", "plain.txt"]).output()?;

    assert!(output.status.success());
    let schema: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(schema, json!({"type": "object", "properties": {}, "required": []}));

    Ok(())
}

#[test]
fn test_schema_is_reproducible() -> Result<()> {
    let test = CliTest::with_file("main.tf.ejs", TEMPLATE)?;

    let first = test.schema_command().args(["--template", "main.tf.ejs"]).output()?;
    let second = test.schema_command().args(["--template", "main.tf.ejs"]).output()?;

    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_schema_custom_delimiters_from_flags() -> Result<()> {
    let test = CliTest::with_file("t.hbs", "{{ user.name }} <%= ignored.value %>")?;

    let output = test
        .schema_command()
        .args(["--template", "t.hbs", "--open", "{{", "--close", "}}"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let schema: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(schema["required"], json!(["user"]));

    Ok(())
}

#[test]
fn test_schema_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("t.hbs", "{{ user.name }}")?;
    test.write_file(".formgenrc.json", r#"{ "open": "{{", "close": "}}", "indent": 4 }"#)?;

    let output = test.schema_command().args(["--template", "t.hbs"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("{\n    \"type\": \"object\""));
    let schema: Value = serde_json::from_str(&out)?;
    assert_eq!(schema["required"], json!(["user"]));

    Ok(())
}

#[test]
fn test_schema_missing_template() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.schema_command().args(["--template", "missing.ejs"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "error: File not found: missing.ejs\n");

    Ok(())
}

#[test]
fn test_schema_write_failure() -> Result<()> {
    let test = CliTest::with_file("t.ejs", "<%= a.b %>")?;

    let output = test
        .schema_command()
        .args(["--template", "t.ejs", "--output", "no-such-dir/schema.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("error: Failed to write "));

    Ok(())
}

#[test]
fn test_schema_invalid_config() -> Result<()> {
    let test = CliTest::with_file("t.ejs", "<%= a.b %>")?;
    test.write_file(".formgenrc.json", r#"{ "open": "" }"#)?;

    let output = test.schema_command().args(["--template", "t.ejs"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'open' marker"));

    Ok(())
}
