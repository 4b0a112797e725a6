//! Tests for the `show` command

use crate::helpers::*;
use anyhow::Result;
use serde_json::json;

#[test]
fn test_show_json_preserves_order() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file(
    "release.config.json",
    r#"{
      "branches": ["next", "main"],
      "repositoryUrl": "https://example.com/r.git",
      "plugins": ["a", ["b", {"x": 1}]]
    }"#,
  )?;

  let output = run_liftoff(&project.path, &["show", "--json"])?;
  let value: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;

  assert_eq!(value["branches"], json!(["next", "main"]));
  assert_eq!(value["repositoryUrl"], json!("https://example.com/r.git"));

  let plugins = value["plugins"].as_array().unwrap();
  assert_eq!(plugins.len(), 2);
  assert_eq!(plugins[0], json!("a"));
  assert_eq!(plugins[1], json!(["b", {"x": 1}]));

  Ok(())
}

#[test]
fn test_show_json_round_trips_through_load() -> Result<()> {
  let project = TestProject::new()?;
  run_liftoff(&project.path, &["init"])?;

  let first = run_liftoff(&project.path, &["show", "--json"])?;

  // Feed the emitted document back in as the config and show it again
  project.write_file("release.config.json", &stdout_of(&first))?;
  let second = run_liftoff(&project.path, &["show", "--json"])?;

  assert_eq!(stdout_of(&first), stdout_of(&second));

  Ok(())
}

#[test]
fn test_show_human_output_lists_pipeline() -> Result<()> {
  let project = TestProject::new()?;
  run_liftoff(&project.path, &["init"])?;

  let output = run_liftoff(&project.path, &["show"])?;
  let stdout = stdout_of(&output);

  assert!(stdout.contains("commit-analyzer"));
  assert!(stdout.contains("5 stages"));
  assert!(stdout.contains("options: assets, message"));

  Ok(())
}

#[test]
fn test_show_reads_yaml_rendition() -> Result<()> {
  let project = TestProject::new()?;
  project.write_file(
    ".releaserc.yaml",
    "branches: [main]\nrepositoryUrl: https://example.com/r.git\nplugins:\n  - changelog\n",
  )?;

  let output = run_liftoff(&project.path, &["show", "--json"])?;
  let value: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
  assert_eq!(value["plugins"], json!(["changelog"]));

  Ok(())
}

#[test]
fn test_show_fails_without_config() -> Result<()> {
  let project = TestProject::new()?;

  let output = run_liftoff_raw(&project.path, &["show"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("No release configuration found"));

  Ok(())
}
