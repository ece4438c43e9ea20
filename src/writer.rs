//! Artifact output: remove any stale file, then create it fresh.
//!
//! The output directory must already exist. A write that fails after the
//! file was created removes the truncated file again, so an artifact either
//! holds the complete text or is absent.
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{GenError, IoOp};

pub fn write_artifact(dir: &Path, name: &str, contents: &str) -> Result<PathBuf, GenError> {
    let path = dir.join(name);

    match fs::remove_file(&path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed stale artifact"),
        Err(error) if error.kind() == ErrorKind::NotFound => {}
        Err(error) => return Err(GenError::io(IoOp::Remove, path, error)),
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|error| GenError::io(IoOp::Create, &path, error))?;

    if let Err(error) = file.write_all(contents.as_bytes()).and_then(|()| file.flush()) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(&path) {
            tracing::warn!(path = %path.display(), %cleanup, "could not remove truncated artifact");
        }
        return Err(GenError::io(IoOp::Write, path, error));
    }

    Ok(path)
}
