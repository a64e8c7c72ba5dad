use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, HOME_PAGE, stderr, stdout};

#[test]
fn test_list_prints_aligned_table() -> Result<()> {
    let test = CliTest::with_file("HomePage.fxml", HOME_PAGE)?;

    let output = test.list_command().arg("HomePage.fxml").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "HomePage.fxml\n   9  Button  submitBtn\n  10  Button  cancelBtn\n  11  Label   titleLbl\n"
    );
    assert!(!test.root().join("HomePageIDs.txt").exists());

    Ok(())
}

#[test]
fn test_list_json() -> Result<()> {
    let test = CliTest::with_file("HomePage.fxml", HOME_PAGE)?;

    let output = test
        .list_command()
        .args(["HomePage.fxml", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output))?;
    let file = &value[0];
    assert_eq!(file["file"], "HomePage.fxml");
    assert_eq!(file["records"].as_array().map(Vec::len), Some(3));
    assert_eq!(file["records"][0]["componentType"], "Button");
    assert_eq!(file["records"][0]["line"], 9);
    assert_eq!(file["grouped"][0]["identifiers"][1], "cancelBtn");
    assert_eq!(file["grouped"][1]["componentType"], "Label");
    assert_eq!(file["malformed"].as_array().map(Vec::len), Some(0));

    Ok(())
}

#[test]
fn test_list_reports_malformed_lines() -> Result<()> {
    let test = CliTest::with_file("Broken.fxml", "<Label fx:id=\"a\"b\"/>\n")?;

    let output = test.list_command().arg("Broken.fxml").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Broken.fxml:1: attribute value contains an unescaped quote"));
    assert!(stdout(&output).contains("(no identifiers)"));

    Ok(())
}
