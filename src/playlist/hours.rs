use std::collections::hash_map::{Entry, HashMap};
use std::ffi::{OsStr, OsString};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::playlist::{Error, Result};

/// Open hourly playlists of one splitting pass.
///
/// Files are opened for appending the first time an entry for them
/// comes along and stay open until `finish` is called or the value
/// is dropped.
pub struct HourFiles {
    directory: PathBuf,
    open: HashMap<OsString, BufWriter<File>>,
}

impl HourFiles {
    pub fn new<P: Into<PathBuf>>(directory: P) -> HourFiles {
        HourFiles {
            directory: directory.into(),
            open: HashMap::new(),
        }
    }

    /// Appends the line as-is to the hourly playlist with the
    /// given name, creating it if it does not exist yet.
    pub fn append(&mut self, file_name: &OsStr, line: &str) -> Result<()> {
        let path = self.directory.join(file_name);
        let writer = match self.open.entry(file_name.to_os_string()) {
            Entry::Occupied(open) => open.into_mut(),
            Entry::Vacant(vacant) => {
                let file = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(&path)
                    .map_err(|err| Error::writing(&path, err))?;
                vacant.insert(BufWriter::new(file))
            }
        };
        writer
            .write_all(line.as_bytes())
            .map_err(|err| Error::writing(&path, err))
    }

    /// Flushes and closes all hourly playlists.
    pub fn finish(mut self) -> Result<()> {
        let directory = &self.directory;
        for (file_name, mut writer) in self.open.drain() {
            writer
                .flush()
                .map_err(|err| Error::writing(&directory.join(&file_name), err))?;
        }
        Ok(())
    }
}
