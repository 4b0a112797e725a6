//! Validate the release configuration and report issues

use std::env;

use crate::checks::{Check as _, CheckContext, Severity, create_default_runner};
use crate::core::config::ReleaseConfig;
use crate::core::error::{ConfigError, ExitCode, LiftoffError, LiftoffResult, ResultExt};

/// Run the check command: load the config, then run all lints over it
///
/// Loading failures (missing, unreadable, malformed) propagate to the caller
/// verbatim; lint findings are reported here and mapped to the validation
/// exit code.
pub fn run_check(thorough: bool, json: bool, strict: bool) -> LiftoffResult<()> {
  let current_dir = env::current_dir()?;

  let config_path = ReleaseConfig::find_config_path(&current_dir).ok_or_else(|| {
    LiftoffError::Config(ConfigError::NotFound {
      search_root: current_dir.clone(),
    })
  })?;
  let config = ReleaseConfig::load_from(&config_path)?;

  let ctx = CheckContext {
    config,
    config_path: config_path.clone(),
    thorough,
  };

  let runner = create_default_runner();
  let results = runner.run_all(&ctx)?;

  let has_errors = results.iter().any(|r| !r.passed && r.severity == Severity::Error);
  let has_warnings = results.iter().any(|r| !r.passed && r.severity == Severity::Warning);

  if json {
    // JSON output for CI/automation
    let json_output = serde_json::to_string_pretty(&results).context("Failed to serialize check results")?;
    println!("{}", json_output);
  } else {
    println!("🔍 Checking {}\n", config_path.display());

    println!("📋 Registered checks:");
    for check in runner.checks() {
      println!("   • {}: {}", check.name(), check.description());
    }
    println!();

    for result in &results {
      let icon = if result.passed { "✅" } else { "❌" };
      println!("{} {}: {}", icon, result.check_name, result.message);

      if !result.passed {
        if let Some(ref suggestion) = result.suggestion {
          println!("   💡 Fix: {}", suggestion);
        }
      }
    }

    // Summary
    let passed_count = results.iter().filter(|r| r.passed).count();
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Summary: {}/{} checks passed", passed_count, results.len());

    if has_errors {
      println!("\n⚠️  Configuration has errors. The release pipeline would not run.");
    } else if has_warnings {
      println!("\n⚠️  Some warnings found. Consider addressing them.");
    } else {
      println!("\n✨ Configuration looks good.");
    }
  }

  if has_errors || (strict && has_warnings) {
    std::process::exit(ExitCode::Validation.as_i32());
  }

  Ok(())
}
