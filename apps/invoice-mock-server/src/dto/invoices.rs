//! DTOs for invoice endpoints

use serde::Serialize;
use utoipa::ToSchema;

/// Message returned when no MSISDN was supplied
pub const INVALID_REQUEST_MESSAGE: &str =
    "msisdn é obrigatório (via query ?msisdn=... ou header x-querystring: msisdn=...)";

/// Message returned for every internal failure
pub const MOCK_ERROR_MESSAGE: &str = "Erro no mock";

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Coarse error code
    #[schema(example = "INVALID_REQUEST")]
    pub code: String,
    /// Human-readable description
    #[schema(example = "msisdn é obrigatório (via query ?msisdn=... ou header x-querystring: msisdn=...)")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}
