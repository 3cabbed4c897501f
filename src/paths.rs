use std::ffi::{OsStr, OsString};
use std::io::{Error, ErrorKind, Result};
use std::path::Path;

use crate::detect::PLAYLIST_SUFFIX;

/// Filename of the playlist without its extension, e.g. `morning`
/// for `lists/morning.m3u`.
///
/// Filenames that are not valid UTF-8 are kept as they are.
pub fn playlist_stem(playlist: &Path) -> Result<&OsStr> {
    playlist
        .file_stem()
        .ok_or_else(|| Error::new(ErrorKind::InvalidInput, "playlist path has no filename"))
}

/// Name of the playlist that collects the lines of one hour.
pub fn hour_file_name(stem: &OsStr, hour: &str) -> OsString {
    let mut name = stem.to_os_string();
    name.push(hour);
    name.push(PLAYLIST_SUFFIX);
    name
}
