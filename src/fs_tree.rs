//! Thin wrappers over the filesystem operations the pipeline needs.
//!
//! Every error carries the path it concerns, so a fatal abort in the
//! orchestrator can say exactly which directory or file was the problem.
//!
//! ## Materializing an album
//!
//! [`copy_dir`] mirrors a source tree into the output tree. It creates the
//! destination if needed, refuses to copy into something that is not a
//! directory, and overwrites files that already exist. Nothing is removed from
//! the destination, and a failure part way leaves whatever was already copied
//! in place.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum FileTreeError {
    #[error("Failed to {op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    #[error("{} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("Failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl FileTreeError {
    fn io(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FileTreeError>;

/// All entries of a directory, in the order the OS returns them.
pub fn list_dir(path: &Path) -> Result<Vec<fs::DirEntry>> {
    fs::read_dir(path)
        .map_err(|e| FileTreeError::io("open", path, e))?
        .map(|entry| entry.map_err(|e| FileTreeError::io("list", path, e)))
        .collect()
}

/// Metadata for `path`, following symlinks.
pub fn stat(path: &Path) -> Result<fs::Metadata> {
    fs::metadata(path).map_err(|e| FileTreeError::io("stat", path, e))
}

/// Create `path` and any missing parents.
pub fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| FileTreeError::io("create directory", path, e))
}

/// Create a single directory, accepting one that already exists.
pub fn create_dir_if_missing(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(())
            } else {
                Err(FileTreeError::NotADirectory(path.to_path_buf()))
            }
        }
        Err(e) => Err(FileTreeError::io("create directory", path, e)),
    }
}

/// Create (or truncate) a file for writing.
pub fn create_file(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| FileTreeError::io("create", path, e))
}

/// Copy one file, overwriting the destination.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| FileTreeError::io("copy", from, e))
}

/// Recursively copy the contents of `from` into `to`.
///
/// `to` is created if it does not exist. Symlinks are not followed while
/// walking; a link to a file is copied as the file it points to.
pub fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    match fs::metadata(to) {
        Ok(meta) if !meta.is_dir() => return Err(FileTreeError::NotADirectory(to.to_path_buf())),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => create_dir_all(to)?,
        Err(e) => return Err(FileTreeError::io("stat", to, e)),
    }

    for entry in WalkDir::new(from).min_depth(1) {
        let entry = entry.map_err(|e| FileTreeError::Walk {
            path: from.to_path_buf(),
            source: e,
        })?;
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let dest = to.join(relative);

        if entry.file_type().is_dir() {
            create_dir_if_missing(&dest)?;
        } else {
            copy_file(entry.path(), &dest)?;
        }
    }

    Ok(())
}
