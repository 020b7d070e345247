//! Batch conversion of rule files into the platform formats.

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::converter::{EgernConverter, ListParser, SingboxConverter};
use crate::error::{Error, Result};
use crate::layout::{self, EGERN_DIR, SINGBOX_DIR};

/// Target platform of a conversion batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Egern line-oriented rule files
    Egern,
    /// sing-box source rule-set files
    Singbox,
}

impl Platform {
    /// Get the platform name as used in progress messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Egern => "Egern",
            Platform::Singbox => "Singbox",
        }
    }

    /// Name of the output tree this platform's files live under.
    pub fn root_dir(&self) -> &'static str {
        match self {
            Platform::Egern => EGERN_DIR,
            Platform::Singbox => SINGBOX_DIR,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Collect the files a batch will process.
///
/// A file yields itself; a directory yields every regular file beneath it,
/// sorted by path. A nonexistent path is fatal.
pub fn collect_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(Error::PathNotFound(path.to_path_buf()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Convert one rule file in place and write its sibling `readme.md`.
///
/// The converted document replaces the input file before the readme is
/// resolved and written, so a readme-side failure leaves the converted
/// file behind. Returns the number of parsed rule lines.
pub fn process_file(platform: Platform, path: &Path) -> Result<usize> {
    let rule_name = path.file_stem().and_then(OsStr::to_str).unwrap_or("");
    let file = fs::File::open(path)?;
    let rules = ListParser::parse(file)?;
    log::debug!("parsed {} rule lines from {}", rules.len(), path.display());

    match platform {
        Platform::Egern => {
            let doc = EgernConverter::convert(&rules, rule_name);
            fs::write(path, doc)?;

            let relative = relative_to_repo(path, platform)?;
            let readme = EgernConverter::readme(rule_name, &layout::to_posix(&relative));
            fs::write(path.with_file_name("readme.md"), readme)?;
        }
        Platform::Singbox => {
            let json = SingboxConverter::convert(&rules)?;
            fs::write(path, json)?;

            let json_relative = relative_to_repo(path, platform)?;
            let srs_relative = json_relative.with_extension("srs");
            let readme = SingboxConverter::readme(
                rule_name,
                &layout::to_posix(&json_relative),
                &layout::to_posix(&srs_relative),
            );
            fs::write(path.with_file_name("readme.md"), readme)?;
        }
    }

    Ok(rules.len())
}

/// Resolve a converted file's path relative to the parent of its platform
/// root directory, i.e. the path segment the raw-download URL ends with.
fn relative_to_repo(path: &Path, platform: Platform) -> Result<PathBuf> {
    let root_name = platform.root_dir();
    let platform_root = path
        .ancestors()
        .skip(1)
        .find(|p| p.file_name() == Some(OsStr::new(root_name)))
        .ok_or_else(|| Error::PlatformRootNotFound {
            root: root_name,
            path: path.to_path_buf(),
        })?;

    let base = platform_root.parent().unwrap_or_else(|| Path::new(""));
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .map_err(|_| Error::OutsideTree {
            path: path.to_path_buf(),
            base: base.to_path_buf(),
        })
}
