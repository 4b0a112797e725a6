//! Release-branch configuration checks

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::LiftoffResult;
use std::collections::BTreeSet;

/// Check that validates the release-branch list
pub struct BranchesCheck;

impl Check for BranchesCheck {
  fn name(&self) -> &str {
    "branches"
  }

  fn description(&self) -> &str {
    "Validates the release-triggering branch list"
  }

  fn run(&self, ctx: &CheckContext) -> LiftoffResult<Vec<CheckResult>> {
    let branches = &ctx.config.branches;
    let mut results = Vec::new();

    if branches.is_empty() {
      results.push(CheckResult::error(
        self.name(),
        "No release branches configured; no branch can ever trigger a release",
        Some("Add at least one branch, e.g. \"branches\": [\"main\"]"),
      ));
      return Ok(results);
    }

    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for branch in branches {
      if !seen.insert(branch.as_str()) {
        duplicates.insert(branch.as_str());
      }
    }

    for branch in &duplicates {
      results.push(CheckResult::warning(
        self.name(),
        format!("Branch '{}' is listed more than once", branch),
        Some("Remove the duplicate entry; branch order carries no priority"),
      ));
    }

    if let Some(empty_idx) = branches.iter().position(|b| b.trim().is_empty()) {
      results.push(CheckResult::error(
        self.name(),
        format!("Branch entry {} is empty", empty_idx),
        Some("Remove the empty entry or give it a branch name"),
      ));
    }

    if results.is_empty() {
      results.push(CheckResult::pass(
        self.name(),
        format!("{} release branch(es) configured", branches.len()),
      ));
    }

    Ok(results)
  }
}
