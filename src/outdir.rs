//! Prepares empty output directories, throwing away whatever a
//! previous run left in them.
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use crate::report::Reporter;

use log::Level;
use thiserror::Error;

type Result<T> = std::result::Result<T, Error>;

/// Makes sure an empty directory exists at the given path.
///
/// An existing directory is deleted with everything in it first,
/// read-only entries included. Parent directories are not created.
pub fn recreate_directory(directory: &Path, reporter: &dyn Reporter) -> Result<()> {
    if directory.is_dir() {
        reporter.report(
            Level::Info,
            format_args!("directory {} exists, removing", directory.display()),
        );
        remove_tree(directory).map_err(|source| Error::Remove {
            path: directory.into(),
            source,
        })?;
        reporter.report(
            Level::Info,
            format_args!("directory {} removed", directory.display()),
        );
    } else if directory.symlink_metadata().is_ok() {
        return Err(Error::NotADirectory(directory.into()));
    }

    fs::create_dir(directory).map_err(|source| Error::Create {
        path: directory.into(),
        source,
    })?;
    reporter.report(
        Level::Info,
        format_args!("directory {} created", directory.display()),
    );
    Ok(())
}

/// Removes the entry at the given path, descending into directories.
///
/// Permissions of every entry are opened up before it is listed or
/// removed. Symbolic links are removed, not followed.
fn remove_tree(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    let file_type = metadata.file_type();
    if file_type.is_symlink() {
        return fs::remove_file(path);
    }

    open_permissions(path, &metadata)?;
    if file_type.is_dir() {
        for entry in fs::read_dir(path)? {
            remove_tree(&entry?.path())?;
        }
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(unix)]
fn open_permissions(path: &Path, metadata: &Metadata) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = metadata.permissions();
    permissions.set_mode(permissions.mode() | 0o700);
    fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
fn open_permissions(path: &Path, metadata: &Metadata) -> io::Result<()> {
    let mut permissions = metadata.permissions();
    permissions.set_readonly(false);
    fs::set_permissions(path, permissions)
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not remove existing directory {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },
    #[error("could not create directory {path}: {source}")]
    Create { path: PathBuf, source: io::Error },
    #[error("{0} exists and is not a directory, refusing to replace it")]
    NotADirectory(PathBuf),
}
