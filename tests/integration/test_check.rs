//! Tests for the `check` command

use crate::helpers::*;
use anyhow::Result;

const VALID_CONFIG: &str = r#"{
  "branches": ["main"],
  "repositoryUrl": "https://github.com/acme/widget.git",
  "plugins": ["commit-analyzer", "release-notes-generator", "changelog", "github", "git"]
}"#;

#[test]
fn test_check_passes_for_valid_config() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("release.config.json", VALID_CONFIG)?;

  let output = run_liftoff(&project.path, &["check"])?;
  assert!(stdout_of(&output).contains("checks passed"));

  Ok(())
}

#[test]
fn test_check_passes_for_scaffolded_config() -> Result<()> {
  let project = TestProject::new()?;
  run_liftoff(&project.path, &["init"])?;

  let output = run_liftoff(&project.path, &["check"])?;
  assert!(stdout_of(&output).contains("Configuration looks good"));

  Ok(())
}

#[test]
fn test_check_fails_without_config() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_liftoff_raw(&project.path, &["check"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("liftoff init"));

  Ok(())
}

#[test]
fn test_check_fails_for_malformed_config() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("release.config.json", r#"{"branches": ["main"]}"#)?;

  let output = run_liftoff_raw(&project.path, &["check"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("Malformed"));

  Ok(())
}

#[test]
fn test_check_empty_branches_is_a_validation_failure() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file(
    "release.config.json",
    r#"{"branches": [], "repositoryUrl": "https://github.com/acme/widget.git", "plugins": ["github"]}"#,
  )?;

  let output = run_liftoff_raw(&project.path, &["check"])?;
  assert_eq!(output.status.code(), Some(3));

  Ok(())
}

#[test]
fn test_check_duplicate_plugins_warn_but_pass() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file(
    "release.config.json",
    r#"{"branches": ["main"], "repositoryUrl": "https://github.com/acme/widget.git", "plugins": ["github", "github"]}"#,
  )?;

  let output = run_liftoff(&project.path, &["check"])?;
  assert!(stdout_of(&output).contains("more than once"));

  Ok(())
}

#[test]
fn test_check_strict_promotes_warnings() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file(
    "release.config.json",
    r#"{"branches": ["main"], "repositoryUrl": "https://github.com/acme/widget.git", "plugins": ["github", "github"]}"#,
  )?;

  let output = run_liftoff_raw(&project.path, &["check", "--strict"])?;
  assert_eq!(output.status.code(), Some(3));

  Ok(())
}

#[test]
fn test_check_json_output() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file("release.config.json", VALID_CONFIG)?;

  let output = run_liftoff(&project.path, &["check", "--json"])?;
  let results: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;

  let results = results.as_array().expect("expected a JSON array of check results");
  assert!(!results.is_empty());
  assert!(results.iter().all(|r| r["passed"] == true));

  Ok(())
}
