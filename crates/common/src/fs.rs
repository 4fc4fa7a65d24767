//! Contains various `std::fs` wrapper functions that also contain the target path in their errors.

use crate::errors::FsPathError;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// The [`fs`](self) result type.
pub type Result<T> = std::result::Result<T, FsPathError>;

/// Wrapper for [`fs::read_to_string`].
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| FsPathError::read(err, path))
}

/// Reads the JSON file and deserialize it into the provided type.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let s = read_to_string(path)?;
    serde_json::from_str(&s).map_err(|source| FsPathError::ReadJson { source, path: path.into() })
}

/// Writes the object as a pretty JSON object.
///
/// The output has two-space indentation and no trailing newline.
pub fn write_pretty_json_file<T: Serialize>(path: &Path, obj: &T) -> Result<()> {
    let json = to_pretty_json(path, obj)?;
    write(path, json)
}

/// Serializes the object the same way [`write_pretty_json_file`] would, without touching disk.
pub fn to_pretty_json<T: Serialize>(path: &Path, obj: &T) -> Result<String> {
    serde_json::to_string_pretty(obj)
        .map_err(|source| FsPathError::WriteJson { source, path: path.into() })
}

/// Wrapper for [`fs::write`].
pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    trace!(?path, "writing file");
    fs::write(path, contents).map_err(|err| FsPathError::write(err, path))
}

/// Wrapper for [`fs::create_dir_all`].
pub fn create_dir_all(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|err| FsPathError::create_dir(err, path))
}

/// Wrapper for [`fs::remove_dir_all`].
///
/// A missing directory is not an error.
pub fn remove_dir_all(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    match fs::remove_dir_all(path) {
        Err(err) if err.kind() != ErrorKind::NotFound => Err(FsPathError::remove_dir(err, path)),
        _ => Ok(()),
    }
}

/// Removes the directory and everything in it, then creates it again empty.
pub fn reset_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!(?path, "resetting directory");
    remove_dir_all(path)?;
    create_dir_all(path)
}

/// Creates the parent directory of `path` if it has one.
pub fn create_parent_dir(path: impl AsRef<Path>) -> Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Returns the sorted paths of all entries directly inside `dir`, directories included.
///
/// A missing directory yields an empty list.
pub fn dir_entries(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(FsPathError::read_dir(err, dir)),
    };

    let mut paths = Vec::new();
    for entry in entries {
        paths.push(entry.map_err(|err| FsPathError::read_dir(err, dir))?.path());
    }
    paths.sort();
    Ok(paths)
}
