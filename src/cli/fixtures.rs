use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Default, full-unicode fixture.
pub const FIXTURE: &str = "fixtures/learnxinyminutes.txt";

/// ASCII-only variant of the same corpus.
pub const FIXTURE_ASCII: &str = "fixtures/learnxinyminutes.ascii.txt";

/// Loads the benchmark corpus from disk, keeping the last successful read
/// around as a fallback for later failures.
pub struct FixtureLoader {
    path: PathBuf,
    cache: Option<String>,
}

impl FixtureLoader {
    pub fn new(ascii: bool) -> Self {
        Self::with_path(if ascii { FIXTURE_ASCII } else { FIXTURE })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the fixture file.
    ///
    /// A read failure is not an error to the caller: the previously read
    /// contents are returned if any exist, and `None` only when no read has
    /// ever succeeded.
    pub fn load(&mut self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                self.cache = Some(text.clone());
                Some(text)
            }
            Err(err) => {
                debug!("failed to read {}: {}", self.path.display(), err);
                self.cache.clone()
            }
        }
    }
}
