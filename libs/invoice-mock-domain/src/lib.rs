//! # Invoice Mock Domain Layer
//!
//! Pure logic behind the invoice listing mock. It follows hexagonal architecture
//! principles:
//!
//! - **Subscriber**: MSISDN normalization and extraction from a request
//! - **Fixture**: the canned JSON document and its reserved metadata fields
//! - **Ports**: trait definitions for fixture storage (`FixtureRepository`)
//! - **Service**: the extract → resolve → compose pipeline
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (filesystem, HTTP, etc.).
//! Fixture storage is expressed as a trait (port) implemented by adapter crates.
//!
//! ## Example
//!
//! ```rust
//! use invoice_mock_domain::{InvoiceService, RequestParts};
//! use invoice_mock_domain::ports::FixtureRepository;
//!
//! async fn example<R: FixtureRepository>(service: InvoiceService<R>) {
//!     let request = RequestParts::new(vec![("msisdn".into(), "11959597475".into())], None);
//!     let response = service.list_invoices(&request).await.unwrap();
//!     println!("status {}", response.status);
//! }
//! ```

pub mod error;
pub mod fixture;
pub mod ports;
pub mod service;
pub mod subscriber;

// Re-export commonly used types
pub use error::{MockError, Result};
pub use fixture::{compose, FixtureDocument, FixtureMetadata, MockResponse};
pub use ports::FixtureRepository;
pub use service::InvoiceService;
pub use subscriber::{extract_msisdn, normalize_msisdn, Msisdn, Pagination, RequestParts};
