use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, stderr, stdout};

const SCHEMA: &str = r#"{
  "type": "object",
  "title": "Bucket",
  "properties": {
    "name": {"type": "string", "title": "Name"},
    "notes": {"type": "string", "title": "Notes"}
  },
  "required": ["name"]
}"#;

#[test]
fn test_html_schema_only() -> Result<()> {
    let test = CliTest::with_file("schema.json", SCHEMA)?;

    let output = test.html_command().args(["--schema", "schema.json"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_snapshot!(stdout(&output), @r#"
    <form class="formgen-form">
      <fieldset id="root">
        <legend id="root__title">Bucket</legend>
        <div class="form-group field field-string">
          <label for="root_name">Name<span class="required">*</span></label>
          <input type="text" class="form-control" id="root_name" name="root_name" required>
        </div>
        <div class="form-group field field-string">
          <label for="root_notes">Notes</label>
          <input type="text" class="form-control" id="root_notes" name="root_notes">
        </div>
      </fieldset>
    </form>
    "#);

    Ok(())
}

#[test]
fn test_html_with_style_and_data() -> Result<()> {
    let test = CliTest::with_file("schema.json", SCHEMA)?;
    test.write_file(
        "style.json",
        r#"{"ui:order": ["notes", "*"], "notes": {"ui:widget": "textarea"}}"#,
    )?;
    test.write_file("data.json", r#"{"name": "logs", "notes": "a & b"}"#)?;

    let output = test
        .html_command()
        .args(["--schema", "schema.json", "--style", "style.json", "--data", "data.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let html = stdout(&output);
    let notes = html
        .find("<textarea class=\"form-control\" id=\"root_notes\" name=\"root_notes\">a &amp; b</textarea>")
        .expect("notes rendered as textarea");
    let name = html.find("value=\"logs\"").expect("name pre-filled");
    assert!(notes < name);

    Ok(())
}

#[test]
fn test_html_missing_schema() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.html_command().args(["--schema", "schema.json"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "error: File not found: schema.json\n");

    Ok(())
}
