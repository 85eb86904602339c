//! Manifest build orchestrator: collect a zone folder's files, classify them and write the CSV.

use std::path::{Path, PathBuf};

use crate::error::GenerateResult;
use crate::manifest::{generate_records, write_manifest};
use crate::models::{ManifestArtifacts, ManifestKind};
use crate::scanning::collect_zone_files;
use crate::selection::SubtreeExclusion;

/// Everything needed to generate the manifest for one zone folder.
#[derive(Debug, Clone)]
pub struct ManifestRequest<'a> {
  /// Zone folder whose files are listed; reference paths are relative to it.
  pub folder: &'a Path,
  /// Manifest flavour for the run.
  pub kind: ManifestKind,
  /// Subtrees left out of the manifest.
  pub exclusion: &'a SubtreeExclusion,
  /// Path of the CSV file to write.
  pub output_path: PathBuf,
}

/// File name of the manifest written for a zone folder.
pub fn manifest_file_name(folder: &Path) -> String {
  let name = folder
    .file_name()
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_else(|| "zone".to_string());
  format!("{name}.csv")
}

/// High-level helper for generating a zone manifest.
pub struct ManifestBuilder<'a> {
  request: ManifestRequest<'a>,
}

impl<'a> ManifestBuilder<'a> {
  /// Create a builder for the provided request.
  pub fn new(request: ManifestRequest<'a>) -> Self {
    Self { request }
  }

  /// Collect and classify the folder's files, write the manifest and return what was written.
  pub fn build(&self) -> GenerateResult<ManifestArtifacts> {
    let request = &self.request;
    let files = collect_zone_files(
      request.folder,
      request.kind,
      request.exclusion,
      Some(request.output_path.as_path()),
    )?;

    tracing::info!(
      output = %request.output_path.display(),
      entries = files.len(),
      kind = request.kind.label(),
      "generating manifest"
    );

    let (entries, summary) = generate_records(request.folder, &files, request.kind);
    write_manifest(&request.output_path, &entries)?;

    Ok(ManifestArtifacts {
      output_path: request.output_path.clone(),
      entries,
      summary,
    })
  }
}
