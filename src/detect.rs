//! deals with detection of playlist files
use std::path::Path;

/// Literal, case-sensitive suffix of playlists that get split.
pub const PLAYLIST_SUFFIX: &str = ".m3u";

/// Checks if the given path points to a regular file that looks like
/// a playlist by its name.
pub fn is_playlist(candidate: &Path) -> bool {
    candidate.is_file() && has_playlist_suffix(candidate)
}

/// Names that are not valid UTF-8 are checked too, invalid bytes
/// before the suffix do not matter.
fn has_playlist_suffix(candidate: &Path) -> bool {
    candidate
        .file_name()
        .map(|name| name.to_string_lossy().ends_with(PLAYLIST_SUFFIX))
        .unwrap_or(false)
}
