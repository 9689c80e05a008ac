//! Persisting rendered artifacts.
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Write `contents` to `dir/file_name`, replacing whatever is there.
///
/// The text goes to a temporary file in `dir` first and is renamed into place,
/// so a failed write never leaves a truncated artifact behind.
pub fn write(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| Error::Io { path, source }
    };
    std::fs::create_dir_all(dir).map_err(io_err(dir))?;
    let path = dir.join(file_name);

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err(dir))?;
    tmp.write_all(contents.as_bytes()).map_err(io_err(&path))?;
    tmp.as_file().sync_all().map_err(io_err(&path))?;
    tmp.persist(&path).map_err(|e| Error::Io { path: path.clone(), source: e.error })?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(path)
}
