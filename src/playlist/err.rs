use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("playlist {0} not found")]
    InputNotFound(PathBuf),
    #[error("permission denied for {0}")]
    PermissionDenied(PathBuf),
    /// Content came before the first hour header, so there is no
    /// hour to put it in.
    #[error("no hour header found in {0} before the first entry, make sure the playlist contains header lines starting with ##")]
    MissingMarker(PathBuf),
    #[error("playlist {0} is not valid UTF-8, other encodings are not supported")]
    Encoding(PathBuf),
    #[error("error reading playlist {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("error writing hourly playlist {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    pub fn reading(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::InputNotFound(path.into()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.into()),
            io::ErrorKind::InvalidData => Self::Encoding(path.into()),
            _ => Self::Read {
                path: path.into(),
                source,
            },
        }
    }

    pub fn writing(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.into()),
            _ => Self::Write {
                path: path.into(),
                source,
            },
        }
    }
}
