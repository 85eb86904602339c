use std::sync::OnceLock;

use regex::Regex;

/// Declarative form of a classification rule, as written in [`RULE_TABLE`].
#[derive(Debug, Clone, Copy)]
pub struct RuleDefinition {
    /// Folder prefix (relative to the zone folder) the rule applies to.
    pub folder: &'static str,
    /// Regular expression matched case-insensitively against the file name.
    pub extension_pattern: &'static str,
    /// Asset type emitted in the manifest.
    pub asset_type: &'static str,
    /// Keep the subfolder structure below `folder` even for shallow files.
    pub force_full_path: bool,
}

const fn rule(
    folder: &'static str,
    extension_pattern: &'static str,
    asset_type: &'static str,
    force_full_path: bool,
) -> RuleDefinition {
    RuleDefinition {
        folder,
        extension_pattern,
        asset_type,
        force_full_path,
    }
}

/// Ordered rule table. The first matching rule wins, so more specific folders
/// (`techsets/ps`, `techsets/vs`) must precede their parents.
pub const RULE_TABLE: &[RuleDefinition] = &[
    rule("xsurface", r"\.xsb$", "xmodelsurfs", false),
    rule("xmodel", r"\.xmb$", "xmodel", false),
    rule("xanime", r"\.xab$", "xanim", false),
    rule("weapons", r"\.json$", "weapon", false),
    rule("vision", r"\.vision$", "rawfile", false),
    rule("vehicles", r"\.json$", "vehicle", false),
    rule("tracer", r"^[^.]+$", "tracer", false),
    rule("techsets/ps", r"\.(hlsl_h2|cso)$", "pixelshader", false),
    rule("techsets/vs", r"\.(hlsl_h2|cso)$", "vertexshader", false),
    rule("techsets", r"\.(cbi|cbt)$", "material", false),
    rule("sounds", r"\.json$", "sound", false),
    rule("sndcurve", r"\.json$", "sndcurve", false),
    rule("sndcontext", r"^[^.]+$", "sndcontext", false),
    rule("rumble", r"^[^.]+$", "rawfile", true),
    rule("reverbsendcurve", r"\.json$", "sndcurve", false),
    rule("physpreset", r"\.pp$", "physpreset", false),
    rule("physcollmap", r"\.pc$", "phys_collmap", false),
    rule("materials", r"\.json$", "material", false),
    rule("lpfcurve", r"\.json$", "lpfcurve", false),
    rule("loaded_sound", r"\.(flac|wav|mp3)$", "loaded_sound", false),
    rule("images", r"\.(h1Image|tga|dds)$", "image", false),
    rule("effects", r"\.fxe$", "fx", false),
    rule("aim_assist", r"\.graph$", "rawfile", false),
    rule("animtrees", r"\.atr$", "rawfile", false),
    rule("attachments", r"\.json$", "attachment", false),
    rule("info", r"^[^.]+$", "rawfile", false),
    rule("maps", r"\.(gsc|gscbin)$", "scriptfile", false),
    rule("mp", r"\.(script|cfg|txt|recipe)$", "rawfile", false),
    rule("netconststrings", r"\.json$", "netconststrings", false),
    rule("skeletonscript", r"^[^.]+$", "skeletonscript", false),
    rule("transient", r"\.asslist$", "rawfile", false),
    rule("ui", r"\.lua$", "luafile", false),
    rule("ui_mp", r"\.txt$", "menufile", false),
    rule("localizedstrings", r"^[^.]+$", "localize", false),
];

/// Compiled classification rule.
#[derive(Debug)]
pub struct Rule {
    /// Folder prefix the rule applies to.
    pub folder: &'static str,
    /// `folder` followed by a slash, as compared against relative paths.
    pub prefix: String,
    /// Case-insensitive file name pattern.
    pub extension_pattern: Regex,
    /// Asset type emitted in the manifest.
    pub asset_type: &'static str,
    /// Keep the subfolder structure below `folder` even for shallow files.
    pub force_full_path: bool,
}

impl Rule {
    fn compile(definition: &RuleDefinition) -> Self {
        let pattern = format!("(?i){}", definition.extension_pattern);
        Self {
            folder: definition.folder,
            prefix: format!("{}/", definition.folder),
            extension_pattern: Regex::new(&pattern).expect("invalid rule extension regex"),
            asset_type: definition.asset_type,
            force_full_path: definition.force_full_path,
        }
    }

    /// Whether the rule claims a file, given its zone-relative path and file name.
    pub fn matches(&self, relative_path: &str, file_name: &str) -> bool {
        relative_path.starts_with(&self.prefix) && self.extension_pattern.is_match(file_name)
    }
}

/// Compiled rules in table order.
pub fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES
        .get_or_init(|| RULE_TABLE.iter().map(Rule::compile).collect())
        .as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(folder: &str) -> usize {
        RULE_TABLE
            .iter()
            .position(|rule| rule.folder == folder)
            .unwrap_or_else(|| panic!("missing rule for {folder}"))
    }

    fn find(folder: &str) -> &'static Rule {
        &rules()[position(folder)]
    }

    #[test]
    fn compiles_every_rule_in_order() {
        let compiled = rules();
        assert_eq!(compiled.len(), RULE_TABLE.len());
        for (rule, definition) in compiled.iter().zip(RULE_TABLE) {
            assert_eq!(rule.folder, definition.folder);
            assert_eq!(rule.prefix, format!("{}/", definition.folder));
        }
    }

    #[test]
    fn shader_rules_precede_generic_techsets() {
        assert!(position("techsets/ps") < position("techsets"));
        assert!(position("techsets/vs") < position("techsets"));
    }

    #[test]
    fn keeps_reference_triples() {
        let xsurface = find("xsurface");
        assert_eq!(xsurface.asset_type, "xmodelsurfs");
        assert!(xsurface.matches("xsurface/body.xsb", "body.xsb"));

        let techsets = find("techsets");
        assert_eq!(techsets.asset_type, "material");
        assert!(techsets.matches("techsets/wall.cbi", "wall.cbi"));
        assert!(techsets.matches("techsets/wall.cbt", "wall.cbt"));

        let loaded = find("loaded_sound");
        for name in ["shot.flac", "shot.wav", "shot.mp3"] {
            assert!(loaded.matches(&format!("loaded_sound/{name}"), name));
        }
        assert!(find("rumble").force_full_path);
    }

    #[test]
    fn extension_patterns_ignore_case() {
        let images = find("images");
        assert!(images.matches("images/sky.DDS", "sky.DDS"));
        assert!(images.matches("images/sky.h1image", "sky.h1image"));
        assert!(images.matches("images/sky.H1IMAGE", "sky.H1IMAGE"));
    }

    #[test]
    fn extension_patterns_only_see_the_file_name() {
        let weapons = find("weapons");
        assert!(!weapons.matches("weapons/json/readme.txt", "readme.txt"));

        let tracer = find("tracer");
        assert!(tracer.matches("tracer/v1.2/red", "red"));
        assert!(!tracer.matches("tracer/red.bin", "red.bin"));
    }

    #[test]
    fn prefix_requires_whole_folder_segment() {
        let ui = find("ui");
        assert!(!ui.matches("ui_mp/menu.lua", "menu.lua"));
        assert!(ui.matches("ui/menu.lua", "menu.lua"));
    }
}
