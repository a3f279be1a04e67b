//! File System Helpers
//!
//! Directory operations used while staging. Copies are plain recursive
//! copies; symlinks are followed.

use std::io;
use std::path::{Path, PathBuf};

/// Remove `dir` with everything in it, then re-create it empty
pub fn clear_directory(dir: &Path) -> io::Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    std::fs::create_dir_all(dir)
}

/// Copy the contents of `src` (not `src` itself) into `dest`
///
/// Existing files in `dest` are overwritten. Returns the copied files.
pub fn copy_dir_contents(src: &Path, dest: &Path) -> io::Result<Vec<PathBuf>> {
    let mut copied = Vec::new();
    copy_recursive(src, dest, &mut copied)?;
    Ok(copied)
}

fn copy_recursive(src: &Path, dest: &Path, copied: &mut Vec<PathBuf>) -> io::Result<()> {
    std::fs::create_dir_all(dest)?;
    let mut entries = std::fs::read_dir(src)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if from.is_dir() {
            copy_recursive(&from, &to, copied)?;
        } else {
            std::fs::copy(&from, &to)?;
            copied.push(to);
        }
    }
    Ok(())
}

/// Copy a single file into `dest_dir`, keeping its file name
pub fn copy_file_into(file: &Path, dest_dir: &Path) -> io::Result<PathBuf> {
    let name = file.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", file.display()),
        )
    })?;
    std::fs::create_dir_all(dest_dir)?;
    let to = dest_dir.join(name);
    std::fs::copy(file, &to)?;
    Ok(to)
}
