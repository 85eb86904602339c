//! Data structures produced while generating a zone manifest.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

/// Which manifest flavour a run produces.
///
/// The kind is chosen once per run and passed to every classification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ManifestKind {
  /// Manifest for a single `mp_*` map folder, limited to map-relevant files.
  Map,
  /// Manifest covering every file in the selected folder.
  Normal,
}

impl ManifestKind {
  /// Returns `true` for map manifests.
  pub fn is_map(self) -> bool {
    matches!(self, Self::Map)
  }

  /// Label shown in menus and logs.
  pub fn label(self) -> &'static str {
    match self {
      Self::Map => "Map CSV",
      Self::Normal => "Normal CSV",
    }
  }
}

/// A single manifest record: asset type and packager reference path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
  /// Asset type column.
  pub asset_type: String,
  /// Normalised reference path column.
  pub reference_path: String,
}

impl Classification {
  /// Build a record from its two columns.
  pub fn new(asset_type: impl Into<String>, reference_path: impl Into<String>) -> Self {
    Self {
      asset_type: asset_type.into(),
      reference_path: reference_path.into(),
    }
  }
}

impl fmt::Display for Classification {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{},{}", self.asset_type, self.reference_path)
  }
}

/// Per-type tallies for a generated manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSummary {
  counts: BTreeMap<String, usize>,
  total: usize,
}

impl TypeSummary {
  /// Count one record of the given type.
  pub fn record(&mut self, asset_type: &str) {
    *self.counts.entry(asset_type.to_string()).or_default() += 1;
    self.total += 1;
  }

  /// Count a manifest line, using the text before its first comma as the type.
  pub fn record_line(&mut self, line: &str) {
    let asset_type = line.split_once(',').map_or(line, |(head, _)| head);
    self.record(asset_type);
  }

  /// Number of records of the given type.
  pub fn count(&self, asset_type: &str) -> usize {
    self.counts.get(asset_type).copied().unwrap_or(0)
  }

  /// Total number of records.
  pub fn total(&self) -> usize {
    self.total
  }

  /// Counts sorted by type name.
  pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
    self.counts.iter().map(|(name, count)| (name.as_str(), *count))
  }
}

/// Result of generating one manifest.
#[derive(Debug)]
pub struct ManifestArtifacts {
  /// Path of the written manifest.
  pub output_path: PathBuf,
  /// Records in the order they were written.
  pub entries: Vec<Classification>,
  /// Per-type tallies.
  pub summary: TypeSummary,
}
