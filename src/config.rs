//! Generator configuration loaded from an optional JSON file in the zonetool root.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GenerateError, GenerateResult};

/// File name searched for in the root directory.
pub const DEFAULT_CONFIG_FILE: &str = "zonetool_csv.json";

/// Discoverable configuration describing the zonetool layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
  /// Name the root directory must carry; `None` disables the check.
  pub root_dir_name: Option<String>,
  /// Prefix identifying map folders offered for map manifests.
  pub map_folder_prefix: String,
  /// Directory names whose subtrees are always left out of manifests.
  pub excluded_dirs: Vec<String>,
  /// Directory receiving `<folder>.csv`; defaults to the root directory.
  pub output_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      root_dir_name: Some("zonetool".into()),
      map_folder_prefix: "mp_".into(),
      excluded_dirs: Vec::new(),
      output_dir: None,
    }
  }
}

impl GeneratorConfig {
  /// Load configuration from the root directory, falling back to defaults.
  ///
  /// A missing file is not an error. A file that cannot be read or parsed is logged and
  /// ignored so generation can still proceed with the stock layout.
  pub fn discover(root: &Path) -> Self {
    let candidate = root.join(DEFAULT_CONFIG_FILE);
    match Self::load_from_path(&candidate) {
      Ok(config) => config,
      Err(err) => {
        tracing::warn!(error = %err, "ignoring unreadable configuration");
        Self::default()
      }
    }
  }

  /// Read configuration from a specific JSON file; missing files yield defaults.
  pub fn load_from_path(path: impl AsRef<Path>) -> GenerateResult<Self> {
    let path = path.as_ref();
    if !path.exists() {
      return Ok(Self::default());
    }
    Self::from_path(path)
  }

  /// Read configuration from a JSON file that must exist.
  pub fn from_path(path: impl AsRef<Path>) -> GenerateResult<Self> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| GenerateError::io(path, err))?;

    let config = serde_json::from_str(&contents).map_err(|source| GenerateError::Config {
      path: path.to_path_buf(),
      source,
    })?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
  }

  /// Directory the manifest for a run rooted at `root` is written to.
  pub fn output_dir(&self, root: &Path) -> PathBuf {
    match &self.output_dir {
      Some(dir) if dir.is_absolute() => dir.clone(),
      Some(dir) => root.join(dir),
      None => root.to_path_buf(),
    }
  }

  /// Resolve the root directory and verify it carries the configured name.
  ///
  /// The root is canonicalised first so `.` and `..` are checked by their real names. The
  /// resolved path is returned for the rest of the run.
  pub fn check_root(&self, root: &Path) -> GenerateResult<PathBuf> {
    let resolved = fs::canonicalize(root).map_err(|err| GenerateError::io(root, err))?;
    let Some(expected) = self.root_dir_name.as_deref() else {
      return Ok(resolved);
    };

    if resolved.file_name().is_some_and(|name| name == expected) {
      Ok(resolved)
    } else {
      Err(GenerateError::RootMismatch {
        expected: expected.to_string(),
        found: resolved,
      })
    }
  }
}
