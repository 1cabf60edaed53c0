//! Domain errors for the invoice mock
//!
//! Every failure of the request pipeline maps to one of these variants. Only two
//! coarse codes ever reach a client; the variant detail is for operators.

use thiserror::Error;

/// Client-visible code for a request without an extractable MSISDN
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";

/// Client-visible code for every internal failure
pub const MOCK_ERROR: &str = "MOCK_ERROR";

/// Errors that can occur while serving a mocked request
#[derive(Error, Debug)]
pub enum MockError {
    /// No MSISDN in the query string nor in the `x-querystring` header
    #[error("msisdn is required (query ?msisdn=... or header x-querystring: msisdn=...)")]
    InvalidRequest,

    /// Neither the subscriber fixture nor the default fixture exists
    #[error("No fixture found for '{0}' and no default fixture")]
    FixtureNotFound(String),

    /// The selected fixture is not a valid JSON object
    #[error("Fixture '{fixture}' could not be parsed: {reason}")]
    FixtureParseError { fixture: String, reason: String },

    /// A reserved metadata field has an unusable value
    #[error("Invalid fixture metadata: {0}")]
    InvalidMetadata(String),

    /// The storage backend failed while reading a fixture
    #[error("Storage operation failed: {0}")]
    StorageFailure(String),
}

impl MockError {
    /// Create a fixture parse error
    pub fn parse_error(fixture: impl Into<String>, reason: impl ToString) -> Self {
        Self::FixtureParseError {
            fixture: fixture.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid metadata error with a message
    pub fn invalid_metadata(msg: impl Into<String>) -> Self {
        Self::InvalidMetadata(msg.into())
    }

    /// Create a storage failure error with a message
    pub fn storage_failure(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }

    /// Whether the client is at fault (as opposed to the mock itself)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest)
    }

    /// The coarse code exposed to clients
    pub fn code(&self) -> &'static str {
        if self.is_client_error() {
            INVALID_REQUEST
        } else {
            MOCK_ERROR
        }
    }
}

/// Result type alias for mock operations
pub type Result<T> = std::result::Result<T, MockError>;
