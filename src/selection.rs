//! Helpers deciding which zone folders and which subtrees take part in a manifest.

use std::collections::BTreeSet;
use std::path::{Component, Path};

use crate::models::ManifestKind;

/// Folder holding technique sets, optionally left out of manifests.
pub const TECHSETS_DIR: &str = "techsets";

/// Trait describing which top-level zone folders are offered for a manifest.
pub trait FolderInclusion {
  /// Returns `true` when the folder may be selected.
  fn is_included(&self, folder_name: &str) -> bool;
}

/// Folder filter for a manifest kind: map manifests only see map folders.
#[derive(Debug, Clone)]
pub struct KindFolderFilter {
  kind: ManifestKind,
  map_prefix: String,
}

impl KindFolderFilter {
  /// Create a filter for the given kind and map folder prefix.
  pub fn new(kind: ManifestKind, map_prefix: impl Into<String>) -> Self {
    Self {
      kind,
      map_prefix: map_prefix.into(),
    }
  }
}

impl FolderInclusion for KindFolderFilter {
  fn is_included(&self, folder_name: &str) -> bool {
    match self.kind {
      ManifestKind::Map => folder_name.starts_with(&self.map_prefix),
      ManifestKind::Normal => true,
    }
  }
}

/// Set of directory names whose subtrees are dropped while collecting files.
#[derive(Debug, Clone, Default)]
pub struct SubtreeExclusion {
  names: BTreeSet<String>,
}

impl SubtreeExclusion {
  /// Build an exclusion from raw directory names.
  pub fn new(names: impl IntoIterator<Item = String>) -> Self {
    Self {
      names: normalise_list(names),
    }
  }

  /// Add a directory name to the exclusion.
  pub fn insert(&mut self, name: &str) {
    self.names.extend(normalise_list([name.to_string()]));
  }

  /// Returns `true` when any component of the relative path is an excluded name.
  pub fn is_excluded(&self, relative_path: &Path) -> bool {
    if self.names.is_empty() {
      return false;
    }

    relative_path.components().any(|component| match component {
      Component::Normal(part) => part.to_str().is_some_and(|part| self.names.contains(part)),
      _ => false,
    })
  }
}

/// Convert a list of raw names into a sorted, de-duplicated set.
///
/// Values are trimmed of whitespace and slashes and empty entries are discarded.
fn normalise_list(values: impl IntoIterator<Item = String>) -> BTreeSet<String> {
  values
    .into_iter()
    .map(|value| value.trim().trim_matches('/').to_string())
    .filter(|value| !value.is_empty())
    .collect()
}
