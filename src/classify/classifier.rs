use std::path::Path;

use crate::classify::rules::{Rule, rules};
use crate::models::{Classification, ManifestKind};

const MAPS_PREFIX: &str = "maps/";

/// Classify a file beneath `base_dir` into its manifest record.
///
/// `file_path` is expected to live under `base_dir`; when it does not, the path is used as-is
/// and classified like any other relative path. Classification is pure, so the same inputs
/// always produce the same record.
pub fn classify(base_dir: &Path, file_path: &Path, kind: ManifestKind) -> Classification {
    let rel = relative_path(base_dir, file_path);
    let depth = rel.matches('/').count();

    let stem = file_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = file_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    // Map scripts keep their full relative path and extension.
    if kind.is_map() && depth >= 1 && rel.starts_with(MAPS_PREFIX) && ext == "gsc" {
        return Classification::new("rawfile", rel);
    }

    if depth == 0 {
        return Classification::new(root_file_type(&ext), stem);
    }

    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(rule) = rules().iter().find(|rule| rule.matches(&rel, &file_name)) {
        let reference = rule_reference_path(rule, &rel, &stem, depth);
        return Classification::new(rule.asset_type, reference);
    }

    let without_ext = match rel.rfind('.') {
        Some(pos) => &rel[..pos],
        None => rel.as_str(),
    };
    Classification::new("rawfile", without_ext)
}

/// Classify a file and render it as a `type,path` manifest line.
pub fn classify_and_format(base_dir: &Path, file_path: &Path, kind: ManifestKind) -> String {
    classify(base_dir, file_path, kind).to_string()
}

fn relative_path(base_dir: &Path, file_path: &Path) -> String {
    let relative = match file_path.strip_prefix(base_dir) {
        Ok(path) => path,
        Err(_) => file_path,
    };
    relative.to_string_lossy().replace('\\', "/")
}

fn root_file_type(ext: &str) -> &'static str {
    match ext {
        "csv" => "stringtable",
        "gsc" | "lua" => "rawfile",
        "gscbin" => "scriptfile",
        _ => "rawfile",
    }
}

fn rule_reference_path(rule: &Rule, rel: &str, stem: &str, depth: usize) -> String {
    let path = if rule.force_full_path || depth >= 2 {
        let parent = rel.rsplit_once('/').map_or("", |(parent, _)| parent);
        format!("{parent}/{stem}")
    } else {
        stem.to_string()
    };

    // A path equal to the bare prefix is left untouched.
    match path.strip_prefix(rule.prefix.as_str()) {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => path,
    }
}
