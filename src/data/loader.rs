//! Suite files on disk.
//!
//! A suite named `math` lives at `<content_dir>/math.json` and holds a JSON
//! array of questions. Nothing is cached: every call reads the directory or
//! file again.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::models::Question;

/// Extension that marks a file in the content directory as a suite.
pub const SUITE_EXTENSION: &str = "json";

/// Longest file name common filesystems accept, in bytes.
const MAX_FILE_NAME_LEN: usize = 255;

/// Error raised while listing or loading suites.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No file backs the requested suite name.
    #[error("No such question suite: {0}")]
    NotFound(String),

    /// The content directory could not be listed.
    #[error("failed to read content directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The suite file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The suite file is not a JSON array of questions.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns true when the caller asked for something that does not exist,
    /// as opposed to the content directory being broken.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}

/// Read-only view over the content directory.
#[derive(Debug, Clone)]
pub struct SuiteStore {
    content_dir: PathBuf,
}

impl SuiteStore {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// List the names of all suites, sorted, without the extension.
    pub async fn list_suites(&self) -> Result<Vec<String>, LoadError> {
        let read_dir_err = |source: io::Error| LoadError::ReadDir {
            path: self.content_dir.clone(),
            source,
        };

        let mut entries = fs::read_dir(&self.content_dir).await.map_err(read_dir_err)?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(read_dir_err)? {
            let file_type = entry.file_type().await.map_err(read_dir_err)?;
            if file_type.is_dir() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };

            if let Some(name) = suite_name(file_name) {
                names.push(name.to_string());
            }
        }

        names.sort();
        debug!(count = names.len(), dir = %self.content_dir.display(), "listed suites");
        Ok(names)
    }

    /// Load every question of the named suite, in file order.
    pub async fn load_suite(&self, name: &str) -> Result<Vec<Question>, LoadError> {
        if !is_valid_suite_name(name) {
            return Err(LoadError::NotFound(name.to_string()));
        }

        let path = self.suite_path(name);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound(name.to_string()));
            }
            Err(source) => return Err(LoadError::Read { path, source }),
        };

        let questions: Vec<Question> = serde_json::from_slice(&bytes)
            .map_err(|source| LoadError::Parse {
                path: path.clone(),
                source,
            })?;

        debug!(suite = name, count = questions.len(), "loaded suite");
        Ok(questions)
    }

    fn suite_path(&self, name: &str) -> PathBuf {
        self.content_dir
            .join(format!("{}.{}", name, SUITE_EXTENSION))
    }
}

/// Strip the suite extension from a file name, if it has one.
fn suite_name(file_name: &str) -> Option<&str> {
    let stem = file_name.strip_suffix(SUITE_EXTENSION)?.strip_suffix('.')?;
    if stem.is_empty() { None } else { Some(stem) }
}

/// Names come from a flat listing, so anything that could address another
/// directory, or that no file could be called, is never a suite.
fn is_valid_suite_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
        && name.len() + 1 + SUITE_EXTENSION.len() <= MAX_FILE_NAME_LEN
}
