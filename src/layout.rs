//! Repository layout constants and path helpers.

use std::path::{Component, Path};

/// Source tree of Clash `.list` rule files, relative to the repository root.
pub const SOURCE_DIR: &str = "ios_rule_script/rule/Clash";

/// Destination tree for Egern rule files.
pub const EGERN_DIR: &str = "Egern";

/// Destination tree for sing-box rule-set files.
pub const SINGBOX_DIR: &str = "Singbox";

/// Extension of source rule-list files.
pub const LIST_EXT: &str = "list";

/// Base URL for raw-download links written into the generated readmes.
pub const RAW_BASE_URL: &str = "https://raw.githubusercontent.com/Centralmatrix3/Ruleset/master/";

/// Render a relative path with `/` separators for use in URLs.
pub fn to_posix(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
