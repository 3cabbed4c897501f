use crate::detect::is_playlist;
use std::io::Result;
use std::path::{Path, PathBuf};

/// Examines the entries of the given directory and returns the
/// playlists among them, in lexicographical order of filenames.
///
/// Subdirectories are not searched.
pub fn collect_playlists(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut found = vec![];
    for entry in directory.read_dir()? {
        let entry = entry?.path();
        if is_playlist(&entry) {
            found.push(entry)
        }
    }
    found.sort_unstable();
    Ok(found)
}
