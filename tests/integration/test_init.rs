//! Tests for the `init` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_init_creates_config() -> Result<()> {
  let project = TestProject::new()?;

  run_liftoff(&project.path, &["init"])?;

  assert!(project.file_exists("release.config.json"));

  let config = project.read_file("release.config.json")?;
  assert!(config.contains("\"branches\""));
  assert!(config.contains("\"repositoryUrl\""));
  assert!(config.contains("commit-analyzer"));
  assert!(config.contains("release-notes-generator"));
  assert!(config.contains("changelog"));
  assert!(config.contains("CHANGELOG.md"));

  Ok(())
}

#[test]
fn test_init_uses_origin_remote_url() -> Result<()> {
  let project = TestProject::new_git("https://github.com/acme/widget.git")?;

  run_liftoff(&project.path, &["init"])?;

  let config = project.read_file("release.config.json")?;
  assert!(config.contains("https://github.com/acme/widget.git"));

  Ok(())
}

#[test]
fn test_init_without_git_uses_placeholder() -> Result<()> {
  let project = TestProject::new()?;

  run_liftoff(&project.path, &["init"])?;

  let config = project.read_file("release.config.json")?;
  assert!(config.contains("https://example.com/your/repo.git"));

  Ok(())
}

#[test]
fn test_init_aborts_instead_of_overwriting() -> Result<()> {
  let project = TestProject::new()?;

  run_liftoff(&project.path, &["init"])?;
  let original = project.read_file("release.config.json")?;

  // Stdin is closed in tests, so the overwrite prompt reads EOF and aborts
  let output = run_liftoff(&project.path, &["init"])?;
  assert!(stdout_of(&output).contains("Aborted"));

  let after = project.read_file("release.config.json")?;
  assert_eq!(original, after);

  Ok(())
}

#[test]
fn test_init_force_overwrites() -> Result<()> {
  let project = TestProject::new()?;

  project.write_file(
    "release.config.json",
    r#"{"branches": ["develop"], "repositoryUrl": "old", "plugins": []}"#,
  )?;

  run_liftoff(&project.path, &["init", "--force"])?;

  let config = project.read_file("release.config.json")?;
  assert!(!config.contains("develop"));
  assert!(config.contains("commit-analyzer"));

  Ok(())
}
