// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Intel Corporation

//! Atomic whole-file replacement.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Replace the contents of `path` with `content`.
///
/// Writes to a temp file in the same directory, copies the original
/// permissions onto it, then renames it over `path`. A reader sees
/// either the old or the new content, never a partial write. Symlinks
/// are resolved first so the link itself survives.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = path.canonicalize().map_err(|e| Error::io(path, e))?;
    let dir = target.parent().unwrap_or(Path::new("/"));

    let permissions = std::fs::metadata(&target)
        .map_err(|e| Error::io(path, e))?
        .permissions();

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| Error::io(path, e))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(path, e))?;
    std::fs::set_permissions(temp.path(), permissions).map_err(|e| Error::io(path, e))?;

    temp.persist(&target)
        .map_err(|e| Error::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
