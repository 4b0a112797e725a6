//! Plugin pipeline checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::LiftoffResult;
use std::collections::BTreeSet;

/// Check that validates the plugin pipeline declaration
///
/// Duplicate identifiers are a warning, not an error: the loader accepts
/// them, but running the same stage twice is undefined behavior in the
/// orchestrator.
pub struct PluginPipelineCheck;

impl Check for PluginPipelineCheck {
  fn name(&self) -> &str {
    "plugin-pipeline"
  }

  fn description(&self) -> &str {
    "Validates the ordered plugin pipeline"
  }

  fn run(&self, ctx: &CheckContext) -> LiftoffResult<Vec<CheckResult>> {
    let plugins = &ctx.config.plugins;
    let mut results = Vec::new();

    if plugins.is_empty() {
      results.push(CheckResult::warning(
        self.name(),
        "Plugin pipeline is empty; a release run would do nothing",
        Some("Declare the pipeline stages in order, e.g. [\"commit-analyzer\", \"github\"]"),
      ));
      return Ok(results);
    }

    for (idx, plugin) in plugins.iter().enumerate() {
      if plugin.name().trim().is_empty() {
        results.push(CheckResult::error(
          self.name(),
          format!("Pipeline stage {} has an empty plugin identifier", idx),
          Some("Every stage needs a non-empty identifier"),
        ));
      }
    }

    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for plugin in plugins {
      if !seen.insert(plugin.name()) {
        duplicates.insert(plugin.name());
      }
    }

    for name in &duplicates {
      results.push(CheckResult::warning(
        self.name(),
        format!("Plugin '{}' appears more than once in the pipeline", name),
        Some("Running a stage twice is undefined; merge the entries into one"),
      ));
    }

    if results.is_empty() {
      results.push(CheckResult::pass(
        self.name(),
        format!("{} pipeline stage(s): {}", plugins.len(), ctx.config.plugin_names().join(" → ")),
      ));
    }

    Ok(results)
  }
}
