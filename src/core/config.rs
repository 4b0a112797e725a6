#![allow(dead_code)]

//! Release configuration: discovery, loading and serialization
//!
//! The configuration is a single declarative document checked into the
//! repository root. It names the branches that may trigger a release, the
//! canonical repository URL, and the ordered plugin pipeline the release
//! orchestrator executes. JSON is the canonical format; YAML and TOML
//! renditions of the same document are accepted, chosen by file extension.
//! Searched in order: .releaserc, .releaserc.json, .releaserc.yaml,
//! .releaserc.yml, .releaserc.toml, release.config.json,
//! release.config.yaml, release.config.toml

use crate::core::error::{ConfigError, LiftoffError, LiftoffResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Candidate file names probed under the search root, highest priority first
const CONFIG_CANDIDATES: [&str; 8] = [
  ".releaserc",
  ".releaserc.json",
  ".releaserc.yaml",
  ".releaserc.yml",
  ".releaserc.toml",
  "release.config.json",
  "release.config.yaml",
  "release.config.toml",
];

/// File written by `save` (and therefore by `liftoff init`)
const CANONICAL_FILE_NAME: &str = "release.config.json";

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
  Json,
  Yaml,
  Toml,
}

impl ConfigFormat {
  /// Determine the format from a file extension
  ///
  /// Returns None for extensionless files (the bare `.releaserc`), which
  /// are tried as JSON first, then YAML.
  pub fn from_path(path: &Path) -> Option<Self> {
    match path.extension().and_then(|ext| ext.to_str()) {
      Some("json") => Some(ConfigFormat::Json),
      Some("yaml") | Some("yml") => Some(ConfigFormat::Yaml),
      Some("toml") => Some(ConfigFormat::Toml),
      _ => None,
    }
  }
}

/// One stage of the release pipeline
///
/// A plugin is declared either as a bare identifier string, or as a
/// two-element sequence of identifier plus an options mapping:
///
/// ```json
/// "plugins": [
///   "commit-analyzer",
///   ["git", { "assets": ["CHANGELOG.md"] }]
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginSpec {
  /// Bare plugin identifier
  Name(String),
  /// Identifier plus options (string keys to arbitrary values)
  WithOptions(String, Map<String, Value>),
}

impl PluginSpec {
  /// The plugin identifier, regardless of declaration form
  pub fn name(&self) -> &str {
    match self {
      PluginSpec::Name(name) => name,
      PluginSpec::WithOptions(name, _) => name,
    }
  }

  /// The options mapping, if the plugin was declared with one
  pub fn options(&self) -> Option<&Map<String, Value>> {
    match self {
      PluginSpec::Name(_) => None,
      PluginSpec::WithOptions(_, options) => Some(options),
    }
  }
}

/// Release configuration for a repository
///
/// # Invariants
///
/// 1. `plugins` order is the pipeline execution order and is preserved
///    exactly as declared
/// 2. The record is immutable once loaded; it lives for the duration of the
///    orchestrator run
/// 3. Duplicate plugin identifiers are not rejected here (downstream
///    behavior is undefined; `liftoff check` warns about them)
///
/// # Example
///
/// ```json
/// {
///   "branches": ["main"],
///   "repositoryUrl": "https://github.com/acme/widget.git",
///   "plugins": [
///     "commit-analyzer",
///     "release-notes-generator",
///     "changelog",
///     "github",
///     ["git", { "assets": ["CHANGELOG.md"], "message": "chore(release): ${nextRelease.version}" }]
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseConfig {
  /// Branches eligible to trigger a release (set membership, not priority)
  pub branches: Vec<String>,

  /// Canonical source repository location
  pub repository_url: String,

  /// Ordered plugin pipeline
  pub plugins: Vec<PluginSpec>,

  /// Tag name template for published releases
  #[serde(default = "default_tag_format")]
  pub tag_format: String,

  /// Skip publishing steps, only report what would happen
  #[serde(default)]
  pub dry_run: bool,

  /// Require a CI environment before releasing
  #[serde(default = "default_ci")]
  pub ci: bool,
}

fn default_tag_format() -> String {
  "v${version}".to_string()
}

fn default_ci() -> bool {
  true
}

impl ReleaseConfig {
  /// Find the config file under `root` using the candidate search order
  pub fn find_config_path(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
      .iter()
      .map(|name| root.join(name))
      .find(|path| path.is_file())
  }

  /// Check if a config exists under the given root
  pub fn exists(root: &Path) -> bool {
    Self::find_config_path(root).is_some()
  }

  /// Load the config discovered under `root`
  pub fn load(root: &Path) -> LiftoffResult<Self> {
    let config_path = Self::find_config_path(root).ok_or_else(|| {
      LiftoffError::Config(ConfigError::NotFound {
        search_root: root.to_path_buf(),
      })
    })?;

    Self::load_from(&config_path)
  }

  /// Load the config from an explicit path
  pub fn load_from(path: &Path) -> LiftoffResult<Self> {
    let content = fs::read_to_string(path).map_err(|source| {
      LiftoffError::Config(ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
      })
    })?;

    parse_document(&content, ConfigFormat::from_path(path), path)
  }

  /// Save as canonical pretty JSON under `root`, returning the written path
  pub fn save(&self, root: &Path) -> LiftoffResult<PathBuf> {
    let config_path = root.join(CANONICAL_FILE_NAME);
    let mut content = self.to_canonical_json()?;
    content.push('\n');
    fs::write(&config_path, content)?;
    Ok(config_path)
  }

  /// Canonical serialization (pretty JSON, field and pipeline order intact)
  pub fn to_canonical_json(&self) -> LiftoffResult<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// Scaffold a config with the conventional five-stage pipeline
  pub fn scaffold(repository_url: impl Into<String>) -> Self {
    let mut git_options = Map::new();
    git_options.insert(
      "assets".to_string(),
      Value::Array(vec![Value::String("CHANGELOG.md".to_string())]),
    );
    git_options.insert(
      "message".to_string(),
      Value::String("chore(release): ${nextRelease.version} [skip ci]\n\n${nextRelease.notes}".to_string()),
    );

    Self {
      branches: vec!["main".to_string()],
      repository_url: repository_url.into(),
      plugins: vec![
        PluginSpec::Name("commit-analyzer".to_string()),
        PluginSpec::Name("release-notes-generator".to_string()),
        PluginSpec::Name("changelog".to_string()),
        PluginSpec::Name("github".to_string()),
        PluginSpec::WithOptions("git".to_string(), git_options),
      ],
      tag_format: default_tag_format(),
      dry_run: false,
      ci: default_ci(),
    }
  }

  /// Pipeline identifiers in execution order
  pub fn plugin_names(&self) -> Vec<&str> {
    self.plugins.iter().map(|p| p.name()).collect()
  }

  /// Check whether a plugin identifier appears in the pipeline
  pub fn has_plugin(&self, name: &str) -> bool {
    self.plugins.iter().any(|p| p.name() == name)
  }
}

/// Parse a document in the given format (None = extensionless `.releaserc`,
/// tried as JSON then YAML). Any parse or shape failure is `Malformed`.
fn parse_document(content: &str, format: Option<ConfigFormat>, path: &Path) -> LiftoffResult<ReleaseConfig> {
  let malformed = |reason: String| {
    LiftoffError::Config(ConfigError::Malformed {
      path: path.to_path_buf(),
      reason,
    })
  };

  match format {
    Some(ConfigFormat::Json) => serde_json::from_str(content).map_err(|e| malformed(e.to_string())),
    Some(ConfigFormat::Yaml) => serde_yaml::from_str(content).map_err(|e| malformed(e.to_string())),
    Some(ConfigFormat::Toml) => toml_edit::de::from_str(content).map_err(|e| malformed(e.to_string())),
    None => serde_json::from_str(content).or_else(|json_err| {
      serde_yaml::from_str(content)
        .map_err(|yaml_err| malformed(format!("not valid JSON ({}) or YAML ({})", json_err, yaml_err)))
    }),
  }
}
