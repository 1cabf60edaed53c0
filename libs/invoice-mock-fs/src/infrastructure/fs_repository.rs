//! Filesystem Fixture Repository Implementation
//!
//! This module implements the `FixtureRepository` trait over a local directory.
//! Reads go through `tokio::fs` so a slow or large fixture never blocks other
//! in-flight requests.

use std::io::ErrorKind;
use std::path::PathBuf;

use invoice_mock_domain::{error::MockError, ports::FixtureRepository};
use tracing::{debug, error, instrument};

/// Directory-based implementation of the FixtureRepository port
///
/// Fixture `name` lives at `<root>/<name>.json`. Files are read fresh on every
/// call and never written.
///
/// ## Error Handling
///
/// A missing file is `Ok(None)`. Any other I/O error is converted to
/// `MockError::StorageFailure` with the path for operators.
#[derive(Debug, Clone)]
pub struct FsFixtureRepository {
    root: PathBuf,
}

impl FsFixtureRepository {
    /// Create a repository rooted at `root`
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use invoice_mock_fs::FsFixtureRepository;
    ///
    /// let repo = FsFixtureRepository::new("./mocks");
    /// assert!(repo.fixture_path("default").ends_with("default.json"));
    /// ```
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        debug!(root = %root.display(), "Initializing FsFixtureRepository");
        Self { root }
    }

    /// Path of the fixture file for `name`
    pub fn fixture_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }
}

impl FixtureRepository for FsFixtureRepository {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn fetch(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, MockError>> + Send {
        let path = self.fixture_path(name);

        async move {
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => {
                    debug!(path = %path.display(), size = text.len(), "Read fixture");
                    Ok(Some(text))
                }
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    debug!(path = %path.display(), "Fixture does not exist");
                    Ok(None)
                }
                Err(err) => {
                    error!(path = %path.display(), error = ?err, "Failed to read fixture");
                    Err(MockError::storage_failure(format!(
                        "failed to read fixture '{}': {}",
                        path.display(),
                        err
                    )))
                }
            }
        }
    }
}
