//! Locale directory listing

use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    /// The configured locale directory is missing or not a directory
    #[error("Locale directory not found: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Lists the names of the direct entries of `locale_dir` in directory order.
///
/// Files and directories are both listed. No filtering is done here; entries
/// with non UTF-8 names and entries that fail to read are skipped.
pub(super) fn list_entry_names(locale_dir: &Path) -> Result<Vec<String>, ScanError> {
    if !locale_dir.is_dir() {
        return Err(ScanError::NotADirectory(locale_dir.to_path_buf()));
    }

    let mut names = Vec::new();
    for result in WalkBuilder::new(locale_dir)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(1))
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read locale directory entry");
                continue;
            }
        };

        // The walk yields the root itself first
        if entry.depth() == 0 {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!(path = %entry.path().display(), "Skipping non UTF-8 locale entry");
            continue;
        };
        names.push(name.to_owned());
    }

    Ok(names)
}
