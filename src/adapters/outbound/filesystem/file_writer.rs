use crate::ports::outbound::OutputPresenter;
use crate::shared::error::AnalyticsError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes `content` to `path` through a temporary file in the same
/// directory, so readers never observe a half-written file.
///
/// # Errors
/// Returns `AnalyticsError::FileWriteError` if the target is a symbolic
/// link, its directory is missing, or any write step fails.
pub(crate) fn write_atomically(path: &Path, content: &[u8]) -> Result<()> {
    let write_error = |details: String| AnalyticsError::FileWriteError {
        path: path.to_path_buf(),
        details,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(write_error(format!(
            "Parent directory does not exist: {}",
            parent.display()
        ))
        .into());
    }

    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(write_error(
                "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
            )
            .into());
        }
    }

    let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(|e| write_error(e.to_string()))?;
    temp.write_all(content)
        .map_err(|e| write_error(e.to_string()))?;
    temp.persist(path)
        .map_err(|e| write_error(e.error.to_string()))?;
    Ok(())
}

/// FileSystemWriter adapter writing the formatted report to a file
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        write_atomically(&self.output_path, content.as_bytes())?;
        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter writing the formatted report to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| {
                if content.ends_with('\n') {
                    Ok(())
                } else {
                    stdout.write_all(b"\n")
                }
            })
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
