use std::path::Path;

const MAP_EXTENSIONS: &[&str] = &["gsc", "fxe", "xmb", "xsb"];

/// Determine whether a file must never reach the manifest.
///
/// Compiled BSP data is produced by the map compiler and is never listed, in either manifest
/// kind. The comparison is case-sensitive.
pub fn should_skip_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "d3dbsp")
}

/// Determine whether a file belongs in a map manifest.
///
/// Map manifests only list scripts, effects, models, surfaces, and sound aliases stored
/// directly inside a `sounds` folder.
pub fn is_valid_map_file(path: &Path) -> bool {
    let Some(ext) = path.extension().map(|ext| ext.to_string_lossy().to_ascii_lowercase())
    else {
        return false;
    };

    if MAP_EXTENSIONS.contains(&ext.as_str()) {
        return true;
    }

    ext == "json"
        && path
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|name| name == "sounds")
}
