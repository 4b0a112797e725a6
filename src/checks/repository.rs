//! Repository URL checks
//!
//! `RepositoryUrlCheck` classifies the configured URL without touching the
//! network. `RepositoryAccessCheck` probes the remote with `git ls-remote`
//! and therefore only runs in thorough mode.

use super::trait_def::{Check, CheckContext, CheckResult};
use crate::core::error::LiftoffResult;
use std::path::Path;
use std::process::Command;

/// How a repository URL is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepoUrlKind {
  /// http:// or https://
  Http,
  /// ssh:// or git://
  Scheme,
  /// scp-like: git@github.com:user/repo.git
  ScpLike,
  /// Filesystem path (absolute or relative)
  LocalPath,
  /// None of the above
  Unknown,
}

fn classify_repository_url(url: &str) -> RepoUrlKind {
  if url.starts_with("http://") || url.starts_with("https://") {
    return RepoUrlKind::Http;
  }
  if url.starts_with("ssh://") || url.starts_with("git://") {
    return RepoUrlKind::Scheme;
  }
  // scp-like: user@host:path, no scheme separator
  if !url.contains("://") && url.contains('@') && url.contains(':') {
    return RepoUrlKind::ScpLike;
  }
  if url.starts_with('/') || url.starts_with("./") || url.starts_with("../") {
    return RepoUrlKind::LocalPath;
  }
  RepoUrlKind::Unknown
}

/// Check that the configured repository URL is plausibly addressable
pub struct RepositoryUrlCheck;

impl Check for RepositoryUrlCheck {
  fn name(&self) -> &str {
    "repository-url"
  }

  fn description(&self) -> &str {
    "Validates the canonical repository URL shape"
  }

  fn run(&self, ctx: &CheckContext) -> LiftoffResult<Vec<CheckResult>> {
    let url = ctx.config.repository_url.trim();

    if url.is_empty() {
      return Ok(vec![CheckResult::error(
        self.name(),
        "repositoryUrl is empty",
        Some("Set it to the canonical repository location, e.g. https://github.com/acme/widget.git"),
      )]);
    }

    let result = match classify_repository_url(url) {
      RepoUrlKind::Http | RepoUrlKind::Scheme | RepoUrlKind::ScpLike => {
        CheckResult::pass(self.name(), format!("Repository URL looks addressable: {}", url))
      }
      RepoUrlKind::LocalPath => {
        if Path::new(url).exists() {
          CheckResult::pass(self.name(), format!("Repository is a local path: {}", url))
        } else {
          CheckResult::warning(
            self.name(),
            format!("Repository path does not exist: {}", url),
            Some("Check the path, or use a remote URL"),
          )
        }
      }
      RepoUrlKind::Unknown => CheckResult::warning(
        self.name(),
        format!("Repository URL is neither a remote URL nor a filesystem path: {}", url),
        Some("Expected https://, ssh://, git://, user@host:path, or a local path"),
      ),
    };

    Ok(vec![result])
  }
}

/// Check that the configured repository is actually reachable
pub struct RepositoryAccessCheck;

impl Check for RepositoryAccessCheck {
  fn name(&self) -> &str {
    "repository-access"
  }

  fn description(&self) -> &str {
    "Probes the repository with git ls-remote (thorough mode only)"
  }

  fn run(&self, ctx: &CheckContext) -> LiftoffResult<Vec<CheckResult>> {
    let url = ctx.config.repository_url.trim();
    if url.is_empty() {
      // RepositoryUrlCheck already reports this as an error
      return Ok(Vec::new());
    }

    let output = Command::new("git").args(["ls-remote", "--heads", url]).output()?;

    let result = if output.status.success() {
      CheckResult::pass(self.name(), format!("Repository is reachable: {}", url))
    } else {
      CheckResult::error(
        self.name(),
        format!(
          "Cannot reach repository {}: {}",
          url,
          String::from_utf8_lossy(&output.stderr).trim()
        ),
        Some("Verify the URL is correct and you have network access and credentials"),
      )
    };

    Ok(vec![result])
  }

  fn is_expensive(&self) -> bool {
    true // Network operation
  }
}
