// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::render::RenderError;

/// Run-level failures. Anything here aborts the run with a non-zero exit.
#[derive(Debug, Error)]
pub enum HolidayError {
    #[error("page renderer unavailable: {0}")]
    Render(#[from] RenderError),
    #[error("path exists but is not a directory: {}", .0.display())]
    OutputNotDir(PathBuf),
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HolidayError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
