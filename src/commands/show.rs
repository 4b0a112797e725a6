//! Print the resolved release configuration

use std::env;

use crate::core::config::ReleaseConfig;
use crate::core::error::LiftoffResult;

/// Run the show command
///
/// `--json` emits the canonical serialization, which preserves branch and
/// pipeline order exactly as declared.
pub fn run_show(json: bool) -> LiftoffResult<()> {
  let current_dir = env::current_dir()?;
  let config = ReleaseConfig::load(&current_dir)?;

  if json {
    println!("{}", config.to_canonical_json()?);
    return Ok(());
  }

  println!("\n🚀 Release configuration\n");
  println!("{:<16} {}", "repository:", config.repository_url);
  println!("{:<16} {}", "branches:", config.branches.join(", "));
  println!("{:<16} {}", "tag format:", config.tag_format);
  println!("{:<16} {}", "dry run:", if config.dry_run { "yes" } else { "no" });
  println!("{:<16} {}", "requires ci:", if config.ci { "yes" } else { "no" });

  println!("\n📋 Pipeline ({} stages):", config.plugins.len());
  for (idx, plugin) in config.plugins.iter().enumerate() {
    match plugin.options() {
      Some(options) => {
        let keys: Vec<&str> = options.keys().map(|k| k.as_str()).collect();
        println!("  {}. {} (options: {})", idx + 1, plugin.name(), keys.join(", "));
      }
      None => println!("  {}. {}", idx + 1, plugin.name()),
    }
  }
  println!();

  Ok(())
}
