//! Resource transport seam for the catalog loader.
//!
//! # Responsibility
//! - Define how raw CSV text is fetched, keeping transport details out of
//!   parsing and normalization.
//! - Provide the file-backed implementation used by local page builds.
//!
//! # Invariants
//! - Fetch failures propagate to the caller unchanged; the loader never
//!   retries on its own.

use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Instant;

pub type SourceResult<T> = Result<T, SourceError>;

/// Transport-level failure while fetching the projects sheet.
#[derive(Debug)]
pub enum SourceError {
    /// The underlying resource could not be read.
    Io {
        location: String,
        source: std::io::Error,
    },
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { location, source } => {
                write!(f, "failed to read projects sheet `{location}`: {source}")
            }
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Transport interface the catalog loads raw CSV text through.
///
/// The configured resource location is fixed configuration, not user input.
/// Hosts with a network transport implement this trait over their own fetch
/// machinery; core ships the filesystem implementation.
pub trait ProjectSource {
    /// Human-readable resource location used in diagnostics.
    fn location(&self) -> String;

    /// Fetches the full CSV text of the projects sheet.
    fn fetch(&self) -> SourceResult<String>;
}

/// Filesystem-backed source reading a configured CSV path.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the given relative or absolute CSV path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProjectSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    /// # Side effects
    /// - Reads the configured file once per call.
    /// - Emits `source_fetch` logging events with duration and status.
    fn fetch(&self) -> SourceResult<String> {
        let started_at = Instant::now();
        info!(
            "event=source_fetch module=catalog status=start location={}",
            self.path.display()
        );

        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                info!(
                    "event=source_fetch module=catalog status=ok location={} bytes={} duration_ms={}",
                    self.path.display(),
                    text.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(text)
            }
            Err(err) => {
                error!(
                    "event=source_fetch module=catalog status=error location={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(SourceError::Io {
                    location: self.path.display().to_string(),
                    source: err,
                })
            }
        }
    }
}
