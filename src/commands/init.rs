//! Scaffold a release configuration for the current repository

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

use crate::core::config::ReleaseConfig;
use crate::core::error::{LiftoffResult, ResultExt};

/// Run the init command to set up a release configuration
pub fn run_init(force: bool) -> LiftoffResult<()> {
  let current_dir = env::current_dir()?;

  // Check if a config already exists
  if ReleaseConfig::exists(&current_dir) && !force {
    print!("⚠️  Configuration already exists. Overwrite? [y/N]: ");
    io::stdout().flush()?;
    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    if !response.trim().eq_ignore_ascii_case("y") {
      println!("Aborted.");
      return Ok(());
    }
  }

  // Take the repository URL from the origin remote when one is configured
  let repository_url = match detect_repository_url(&current_dir) {
    Some(url) => {
      println!("📦 Using repository URL from origin remote: {}", url);
      url
    }
    None => {
      println!("⚠️  No git origin remote found; using a placeholder repository URL");
      "https://example.com/your/repo.git".to_string()
    }
  };

  let config = ReleaseConfig::scaffold(repository_url);
  let written = config
    .save(&current_dir)
    .with_context(|| format!("Failed to write configuration under {}", current_dir.display()))?;

  println!("💾 Wrote {}", written.display());
  println!("\n📋 Scaffolded pipeline:");
  for (idx, name) in config.plugin_names().iter().enumerate() {
    println!("  {}. {}", idx + 1, name);
  }
  println!("\n✨ Edit the file to match your release flow, then run `liftoff check`.");

  Ok(())
}

/// Read the origin remote URL via system git, if the directory is a repo
fn detect_repository_url(root: &Path) -> Option<String> {
  let output = Command::new("git")
    .current_dir(root)
    .args(["config", "--get", "remote.origin.url"])
    .output()
    .ok()?;

  if !output.status.success() {
    return None;
  }

  let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
  if url.is_empty() { None } else { Some(url) }
}
