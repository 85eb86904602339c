//! Directory scanning utilities for listing zone folders and harvesting their files.

use std::fs;
use std::path::{Path, PathBuf};

use same_file::is_same_file;
use walkdir::WalkDir;

use crate::classify::{is_valid_map_file, should_skip_file};
use crate::error::{GenerateError, GenerateResult};
use crate::models::ManifestKind;
use crate::selection::{FolderInclusion, SubtreeExclusion};

/// List the immediate subdirectories of `root` accepted by `filter`, sorted by name.
pub fn list_zone_folders<F: FolderInclusion>(root: &Path, filter: &F) -> GenerateResult<Vec<PathBuf>> {
  let entries = fs::read_dir(root).map_err(|err| GenerateError::io(root, err))?;

  let mut folders = Vec::new();
  for entry in entries {
    let entry = entry.map_err(|err| GenerateError::io(root, err))?;
    if !entry.file_type().is_ok_and(|ft| ft.is_dir()) {
      continue;
    }

    let name = entry.file_name().to_string_lossy().to_string();
    if filter.is_included(&name) {
      folders.push(entry.path());
    }
  }

  if folders.is_empty() {
    return Err(GenerateError::NoFolders {
      root: root.to_path_buf(),
    });
  }

  folders.sort();
  Ok(folders)
}

/// Pick a folder from the candidates by its directory name.
pub fn find_zone_folder(folders: &[PathBuf], name: &str) -> GenerateResult<PathBuf> {
  folders
    .iter()
    .find(|folder| folder.file_name().is_some_and(|file_name| file_name == name))
    .cloned()
    .ok_or_else(|| GenerateError::UnknownFolder {
      name: name.to_string(),
    })
}

/// Walk a zone folder and collect the files that belong in its manifest.
///
/// Files are visited in file-name order so repeated runs write identical manifests. Excluded
/// subtrees, compiled BSP data and, for map manifests, files outside the map whitelist are
/// dropped. `ignore` names a file that must never be listed, typically the manifest being
/// written when it lands inside the folder.
pub fn collect_zone_files(
  folder: &Path,
  kind: ManifestKind,
  exclusion: &SubtreeExclusion,
  ignore: Option<&Path>,
) -> GenerateResult<Vec<PathBuf>> {
  let mut files = Vec::new();

  for entry in WalkDir::new(folder).sort_by_file_name() {
    let entry = entry?;
    let path = entry.path();
    // Links are not followed into directories, but links to files are listed.
    let is_file = if entry.path_is_symlink() {
      path.is_file()
    } else {
      entry.file_type().is_file()
    };
    if !is_file {
      continue;
    }

    let relative = path.strip_prefix(folder).unwrap_or(path);
    if exclusion.is_excluded(relative) {
      continue;
    }

    if should_skip_file(path) {
      continue;
    }

    if kind.is_map() && !is_valid_map_file(path) {
      continue;
    }

    if ignore.is_some_and(|ignored| is_same_file(path, ignored).unwrap_or(false)) {
      tracing::debug!(path = %path.display(), "skipping manifest output file");
      continue;
    }

    files.push(path.to_path_buf());
  }

  Ok(files)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::selection::{KindFolderFilter, TECHSETS_DIR};
  use tempfile::tempdir;

  fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).expect("failed to create parent");
    }
    fs::write(path, b"").expect("failed to write file");
  }

  fn relatives(folder: &Path, files: &[PathBuf]) -> Vec<String> {
    files
      .iter()
      .map(|file| {
        file
          .strip_prefix(folder)
          .expect("file under folder")
          .to_string_lossy()
          .replace('\\', "/")
      })
      .collect()
  }

  #[test]
  fn lists_folders_for_each_kind() -> GenerateResult<()> {
    let temp = tempdir().expect("failed to create temp dir");
    let root = temp.path();
    fs::create_dir_all(root.join("mp_crash")).expect("mkdir");
    fs::create_dir_all(root.join("common")).expect("mkdir");
    fs::create_dir_all(root.join("mp_backlot")).expect("mkdir");
    touch(root, "mp_file.txt");

    let maps = list_zone_folders(root, &KindFolderFilter::new(ManifestKind::Map, "mp_"))?;
    assert_eq!(maps, vec![root.join("mp_backlot"), root.join("mp_crash")]);

    let all = list_zone_folders(root, &KindFolderFilter::new(ManifestKind::Normal, "mp_"))?;
    assert_eq!(all.len(), 3);

    assert_eq!(find_zone_folder(&all, "common")?, root.join("common"));
    assert!(matches!(
      find_zone_folder(&maps, "common"),
      Err(GenerateError::UnknownFolder { .. })
    ));
    Ok(())
  }

  #[test]
  fn reports_missing_folders() {
    let temp = tempdir().expect("failed to create temp dir");
    fs::create_dir_all(temp.path().join("common")).expect("mkdir");

    let result = list_zone_folders(temp.path(), &KindFolderFilter::new(ManifestKind::Map, "mp_"));
    assert!(matches!(result, Err(GenerateError::NoFolders { .. })));
  }

  #[test]
  fn collects_sorted_files_without_bsp() -> GenerateResult<()> {
    let temp = tempdir().expect("failed to create temp dir");
    let folder = temp.path().join("common");
    touch(&folder, "materials/b.json");
    touch(&folder, "materials/a.json");
    touch(&folder, "maps/mp/common.d3dbsp");
    touch(&folder, "techsets/wall.cbi");

    let files = collect_zone_files(&folder, ManifestKind::Normal, &SubtreeExclusion::default(), None)?;
    assert_eq!(relatives(&folder, &files), vec![
      "materials/a.json",
      "materials/b.json",
      "techsets/wall.cbi",
    ]);
    Ok(())
  }

  #[test]
  fn map_manifests_keep_only_map_files() -> GenerateResult<()> {
    let temp = tempdir().expect("failed to create temp dir");
    let folder = temp.path().join("mp_crash");
    touch(&folder, "maps/mp_crash.gsc");
    touch(&folder, "sounds/mp_crash.json");
    touch(&folder, "materials/ground.json");
    touch(&folder, "images/ground.dds");

    let files = collect_zone_files(&folder, ManifestKind::Map, &SubtreeExclusion::default(), None)?;
    assert_eq!(relatives(&folder, &files), vec![
      "maps/mp_crash.gsc",
      "sounds/mp_crash.json",
    ]);
    Ok(())
  }

  #[test]
  fn honours_subtree_exclusion_and_ignored_output() -> GenerateResult<()> {
    let temp = tempdir().expect("failed to create temp dir");
    let folder = temp.path().join("common");
    touch(&folder, "techsets/ps/lit.cso");
    touch(&folder, "effects/fire.fxe");
    touch(&folder, "common.csv");

    let mut exclusion = SubtreeExclusion::default();
    exclusion.insert(TECHSETS_DIR);
    let output = folder.join("common.csv");

    let files = collect_zone_files(&folder, ManifestKind::Normal, &exclusion, Some(output.as_path()))?;
    assert_eq!(relatives(&folder, &files), vec!["effects/fire.fxe"]);
    Ok(())
  }

  #[cfg(unix)]
  #[test]
  fn lists_linked_files_but_not_linked_directories() -> GenerateResult<()> {
    use std::os::unix::fs::symlink;

    let temp = tempdir().expect("failed to create temp dir");
    let shared = temp.path().join("shared");
    touch(&shared, "fire.fxe");
    touch(&shared, "nested/smoke.fxe");

    let folder = temp.path().join("common");
    fs::create_dir_all(folder.join("effects")).expect("mkdir");
    symlink(shared.join("fire.fxe"), folder.join("effects/fire.fxe")).expect("link file");
    symlink(shared.join("nested"), folder.join("effects/nested")).expect("link dir");
    symlink(shared.join("missing.fxe"), folder.join("effects/broken.fxe")).expect("link missing");

    let files = collect_zone_files(&folder, ManifestKind::Normal, &SubtreeExclusion::default(), None)?;
    assert_eq!(relatives(&folder, &files), vec!["effects/fire.fxe"]);
    Ok(())
  }
}
