//! Errors raised while locating, scanning and writing zone manifests.

use std::path::PathBuf;

use thiserror::Error;

/// Generic result type used across the crate.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Failures surfaced by manifest generation. Classification itself never fails.
#[derive(Debug, Error)]
pub enum GenerateError {
  /// The root directory does not carry the required name.
  #[error("the tool must be run from '{expected}', found {}", found.display())]
  RootMismatch {
    /// Required directory name.
    expected: String,
    /// Directory that was used instead.
    found: PathBuf,
  },
  /// No folder under the root qualifies for the requested manifest kind.
  #[error("no matching subdirectories in {}", root.display())]
  NoFolders {
    /// Root directory that was listed.
    root: PathBuf,
  },
  /// A folder was requested by name but is not one of the candidates.
  #[error("folder '{name}' is not a candidate for this manifest")]
  UnknownFolder {
    /// Requested folder name.
    name: String,
  },
  /// Failed to read or write a path.
  #[error("failed to access {}: {source}", path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
  /// Failed while walking the selected folder.
  #[error("failed to walk zone folder: {0}")]
  Walk(#[from] walkdir::Error),
  /// Failed to write a manifest record.
  #[error("failed to write manifest: {0}")]
  Csv(#[from] csv::Error),
  /// Failed to parse the configuration file.
  #[error("failed to parse {}: {source}", path.display())]
  Config {
    /// Path of the configuration file.
    path: PathBuf,
    /// Source parse error.
    #[source]
    source: serde_json::Error,
  },
  /// Prompt input ended before an answer was given.
  #[error("input closed while waiting for an answer")]
  InputClosed,
}

impl GenerateError {
  /// Wrap an I/O error with the path that produced it.
  pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::Io {
      path: path.into(),
      source,
    }
  }
}
