use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, HOME_PAGE, stderr, stdout};

#[test]
fn test_generate_writes_both_reports() -> Result<()> {
    let test = CliTest::with_file("ui/HomePage.fxml", HOME_PAGE)?;

    let output = test.generate_command().arg("ui/HomePage.fxml").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} ui/HomePage.fxml: 3 identifiers in 2 types\n"
    );

    assert_eq!(
        test.read_file("ui/HomePageIDs.txt")?,
        "@FXML\nButton submitBtn;\n@FXML\nButton cancelBtn;\n@FXML\nLabel titleLbl;\n"
    );
    assert_eq!(
        test.read_file("ui/HomePageIDsGrouped.txt")?,
        "@FXML\nButton submitBtn, cancelBtn;\n@FXML\nLabel titleLbl;\n"
    );

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("HomePage.fxml", HOME_PAGE)?;

    test.generate_command().arg("HomePage.fxml").output()?;
    let first = (
        test.read_file("HomePageIDs.txt")?,
        test.read_file("HomePageIDsGrouped.txt")?,
    );
    test.generate_command().arg("HomePage.fxml").output()?;
    let second = (
        test.read_file("HomePageIDs.txt")?,
        test.read_file("HomePageIDsGrouped.txt")?,
    );

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_generate_verbose_lists_written_paths() -> Result<()> {
    let test = CliTest::with_file("HomePage.fxml", HOME_PAGE)?;

    let output = test
        .generate_command()
        .args(["HomePage.fxml", "--verbose"])
        .output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("wrote HomePageIDs.txt"));
    assert!(out.contains("wrote HomePageIDsGrouped.txt"));
    assert!(stderr(&output).contains("config: using defaults"));

    Ok(())
}

#[test]
fn test_generate_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_file("HomePage.fxml", HOME_PAGE)?;

    let output = test
        .generate_command()
        .args(["HomePage.fxml", "--dry-run"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("(dry run)"));
    assert!(!test.root().join("HomePageIDs.txt").exists());
    assert!(!test.root().join("HomePageIDsGrouped.txt").exists());

    Ok(())
}

#[test]
fn test_generate_walks_directories() -> Result<()> {
    let test = CliTest::with_file("ui/HomePage.fxml", HOME_PAGE)?;
    test.write_file(
        "ui/pages/FindPage.fxml",
        r#"<TextField fx:id="searchEntryBox" promptText="Search"/>"#,
    )?;
    test.write_file("ui/notes.txt", r#"<Button fx:id="ignored"/>"#)?;

    let output = test.generate_command().arg("ui").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("ui/pages/FindPageIDs.txt")?,
        "@FXML\nTextField searchEntryBox;\n"
    );
    assert!(test.root().join("ui/HomePageIDs.txt").exists());
    assert!(!test.root().join("ui/notesIDs.txt").exists());
    assert!(!test.root().join("ui/notes.txtIDs.txt").exists());

    Ok(())
}

#[test]
fn test_generate_rejects_malformed_lines() -> Result<()> {
    let test = CliTest::with_file(
        "Broken.fxml",
        "<Button fx:id=\"ok\"/>\n<Label fx:id=\"unterminated/>\n",
    )?;

    let output = test.generate_command().arg("Broken.fxml").output()?;

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("error: Broken.fxml:2: attribute value has no closing quote"));
    assert!(err.contains("reports not written"));
    assert!(!test.root().join("BrokenIDs.txt").exists());

    Ok(())
}

#[test]
fn test_generate_skip_malformed_writes_well_formed_records() -> Result<()> {
    let test = CliTest::with_file(
        "Broken.fxml",
        "<Button fx:id=\"ok\"/>\n<Label fx:id=\"unterminated/>\n",
    )?;

    let output = test
        .generate_command()
        .args(["Broken.fxml", "--skip-malformed"])
        .output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: Broken.fxml:2:"));
    assert_eq!(test.read_file("BrokenIDs.txt")?, "@FXML\nButton ok;\n");

    Ok(())
}

#[test]
fn test_generate_missing_input_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().arg("Missing.fxml").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read markup file: Missing.fxml"));

    Ok(())
}

#[test]
fn test_generate_unwritable_report_is_an_error() -> Result<()> {
    let test = CliTest::with_file("HomePage.fxml", HOME_PAGE)?;
    fs::create_dir(test.root().join("HomePageIDsGrouped.txt"))?;

    let output = test.generate_command().arg("HomePage.fxml").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to write report"));
    assert_eq!(
        test.read_file("HomePageIDs.txt")?,
        "@FXML\nButton submitBtn;\n@FXML\nButton cancelBtn;\n@FXML\nLabel titleLbl;\n"
    );

    Ok(())
}

#[test]
fn test_generate_fails_second_file_with_same_reports() -> Result<()> {
    let test = CliTest::with_file("Home.fxml", r#"<Button fx:id="first"/>"#)?;
    test.write_file("Home", r#"<Label fx:id="second"/>"#)?;

    let output = test.generate_command().args(["Home.fxml", "Home"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Report HomeIDs.txt is already generated from Home.fxml"));
    assert_eq!(test.read_file("HomeIDs.txt")?, "@FXML\nButton first;\n");

    Ok(())
}

#[test]
fn test_generate_accepts_comma_in_file_name() -> Result<()> {
    let test = CliTest::with_file("My,Page.fxml", r#"<Button fx:id="okBtn"/>"#)?;

    let output = test.generate_command().arg("My,Page.fxml").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("My,PageIDs.txt")?, "@FXML\nButton okBtn;\n");

    Ok(())
}

#[test]
fn test_generate_requires_input() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.generate_command().output()?;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("<INPUTS>"));

    Ok(())
}

#[test]
fn test_generate_reads_input_from_env() -> Result<()> {
    let test = CliTest::with_file("HomePage.fxml", HOME_PAGE)?;

    let output = test
        .generate_command()
        .env("FXIDS_INPUT", "HomePage.fxml")
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.root().join("HomePageIDsGrouped.txt").exists());

    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        "layout/Main.xml",
        r#"<Button android:id="submit" fx:id="unused"/>"#,
    )?;
    test.write_file(
        ".fxidsrc.json",
        r#"{
            "marker": "android:id",
            "annotation": "// bound",
            "sourceSuffix": ".xml",
            "flatSuffix": ".fields",
            "groupedSuffix": ".grouped"
        }"#,
    )?;

    let output = test.generate_command().arg("layout").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(test.read_file("layout/Main.fields")?, "// bound\nButton submit;\n");
    assert_eq!(test.read_file("layout/Main.grouped")?, "// bound\nButton submit;\n");

    Ok(())
}

#[test]
fn test_generate_cli_overrides_config() -> Result<()> {
    let test = CliTest::with_file("HomePage.fxml", HOME_PAGE)?;
    test.write_file(".fxidsrc.json", r#"{ "annotation": "@Inject" }"#)?;

    let output = test
        .generate_command()
        .args(["HomePage.fxml", "--annotation", "@FXML"])
        .output()?;

    assert!(output.status.success());
    assert!(test.read_file("HomePageIDs.txt")?.starts_with("@FXML\n"));

    Ok(())
}

#[test]
fn test_generate_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file("HomePage.fxml", HOME_PAGE)?;
    test.write_file(
        ".fxidsrc.json",
        r#"{ "flatSuffix": "same", "groupedSuffix": "same" }"#,
    )?;

    let output = test.generate_command().arg("HomePage.fxml").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("must differ"));

    Ok(())
}
