//! Classify collected zone files into manifest records.

use std::path::{Path, PathBuf};

use crate::classify::classify;
use crate::models::{Classification, ManifestKind, TypeSummary};

/// Classify every file beneath `base_dir`, keeping input order, and tally the types.
pub fn generate_records(
  base_dir: &Path,
  files: &[PathBuf],
  kind: ManifestKind,
) -> (Vec<Classification>, TypeSummary) {
  let total = files.len();
  let mut records = Vec::with_capacity(total);
  let mut summary = TypeSummary::default();

  for (index, file) in files.iter().enumerate() {
    let record = classify(base_dir, file, kind);
    let line = record.to_string();
    summary.record_line(&line);
    tracing::debug!("[{}/{}] {}", index + 1, total, line);
    records.push(record);
  }

  (records, summary)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classifies_in_input_order_and_counts_types() {
    let base = Path::new("/zonetool/mp_crash");
    let files: Vec<PathBuf> = ["maps/mp_crash.gsc", "effects/fire.fxe", "sounds/amb.json"]
      .iter()
      .map(|rel| base.join(rel))
      .collect();

    let (records, summary) = generate_records(base, &files, ManifestKind::Map);

    let lines: Vec<String> = records.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec![
      "rawfile,maps/mp_crash.gsc",
      "fx,fire",
      "sound,amb",
    ]);
    assert_eq!(summary.total(), 3);
    assert_eq!(summary.count("rawfile"), 1);
    assert_eq!(summary.count("fx"), 1);
    assert_eq!(summary.count("sound"), 1);
  }

  #[test]
  fn empty_input_produces_empty_manifest() {
    let (records, summary) = generate_records(Path::new("/zonetool/common"), &[], ManifestKind::Normal);
    assert!(records.is_empty());
    assert_eq!(summary.total(), 0);
  }
}
