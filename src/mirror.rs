//! Directory mirror: seeds the Egern and Singbox trees from the Clash rule tree.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::layout::{EGERN_DIR, LIST_EXT, SINGBOX_DIR, SOURCE_DIR};

/// Destination trees and the extension their copies receive.
const DESTINATIONS: &[(&str, &str)] = &[(EGERN_DIR, "yaml"), (SINGBOX_DIR, "json")];

/// Mirror every `.list` file under the Clash rule tree into the Egern and
/// Singbox trees, swapping the extension per destination.
///
/// Both destination trees are removed and recreated first, so stale files
/// from earlier runs never survive. All paths are resolved relative to
/// `base`. Any filesystem error aborts the whole operation.
pub fn mirror_rulesets(base: &Path) -> Result<()> {
    let source = base.join(SOURCE_DIR);

    for (dir, _) in DESTINATIONS {
        let dest = base.join(dir);
        if dest.exists() {
            fs::remove_dir_all(&dest)?;
        }
        fs::create_dir_all(&dest)?;
    }

    for entry in WalkDir::new(&source) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(OsStr::to_str) != Some(LIST_EXT) {
            continue;
        }

        let relative = path.strip_prefix(&source).map_err(|_| Error::OutsideTree {
            path: path.to_path_buf(),
            base: source.clone(),
        })?;

        for (dir, ext) in DESTINATIONS {
            let target = base.join(dir).join(relative).with_extension(ext);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)?;
            log::debug!("mirrored {} -> {}", path.display(), target.display());
        }
    }

    Ok(())
}
