//! Ports (trait definitions) for external dependencies
//!
//! Following hexagonal architecture, the domain defines what it needs from
//! fixture storage, and the infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` so the service is monomorphized over its repository.

use std::future::Future;

use crate::error::MockError;

/// Port for fixture storage
///
/// Implementations only read: fixtures are never written by the mock.
/// Every call must hit the backing store again (no caching), so edited
/// fixtures are served on the next request.
pub trait FixtureRepository: Send + Sync {
    /// Fetch the raw text of the fixture called `name`
    ///
    /// `name` is either a normalized MSISDN or `default`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no such fixture exists
    ///
    /// # Errors
    ///
    /// Returns `MockError::StorageFailure` if the fixture exists but cannot be read
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Option<String>, MockError>> + Send;
}
