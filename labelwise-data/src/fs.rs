//! Capability-based file helpers built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use serde::de::DeserializeOwned;

use crate::DataError;

/// Open a UTF-8 file path using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open a UTF-8 directory path using ambient authority.
pub fn open_utf8_dir(path: &Utf8Path) -> io::Result<fs_utf8::Dir> {
    fs_utf8::Dir::open_ambient_dir(path, ambient_authority())
}

/// Return whether a path exists and is a regular file.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let Some(name) = path.file_name() else {
        return Ok(false);
    };
    let dir = open_utf8_dir(parent)?;
    match dir.metadata(name) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Read a whole file into a string, attaching the path to failures.
pub fn read_utf8_file(path: &Utf8Path) -> Result<String, DataError> {
    let mut file = open_utf8_file(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(contents)
}

/// Read and decode a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, DataError> {
    let contents = read_utf8_file(path)?;
    decode_json(path.to_path_buf(), &contents)
}

pub(crate) fn decode_json<T: DeserializeOwned>(
    path: Utf8PathBuf,
    contents: &str,
) -> Result<T, DataError> {
    serde_json::from_str(contents).map_err(|source| DataError::Decode { path, source })
}
