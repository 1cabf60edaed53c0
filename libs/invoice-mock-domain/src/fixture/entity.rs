//! Fixture document entity
//!
//! A fixture file is a JSON object. Two reserved fields configure the HTTP
//! response instead of being part of the body:
//!
//! - `__status`: integer status code override
//! - `__headers`: object mapping header names to values
//!
//! Both are lifted into [`FixtureMetadata`] at parse time, so the body held by a
//! [`FixtureDocument`] never contains them.

use serde_json::{Map, Value};

use crate::error::{MockError, Result};

/// Name of the fixture served when no subscriber-specific file exists
pub const DEFAULT_FIXTURE: &str = "default";

/// Reserved field holding the status override
pub const STATUS_FIELD: &str = "__status";

/// Reserved field holding the header overrides
pub const HEADERS_FIELD: &str = "__headers";

/// Response metadata declared by a fixture
///
/// A field explicitly set to JSON `null` is treated the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureMetadata {
    pub status: Option<u16>,
    pub headers: Option<Vec<(String, String)>>,
}

/// A parsed fixture: its name, its metadata and its response body
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureDocument {
    name: String,
    metadata: FixtureMetadata,
    body: Map<String, Value>,
}

impl FixtureDocument {
    /// Parse the raw text of the fixture called `name`
    ///
    /// # Errors
    ///
    /// - `MockError::FixtureParseError` if the text is not JSON or its root is not an object
    /// - `MockError::InvalidMetadata` if a reserved field has an unusable value
    pub fn from_json(name: impl Into<String>, text: &str) -> Result<Self> {
        let name = name.into();
        let value: Value =
            serde_json::from_str(text).map_err(|err| MockError::parse_error(&name, err))?;

        let Value::Object(fields) = value else {
            return Err(MockError::parse_error(
                &name,
                "fixture root must be a JSON object",
            ));
        };

        let metadata = FixtureMetadata {
            status: parse_status(fields.get(STATUS_FIELD))?,
            headers: parse_headers(fields.get(HEADERS_FIELD))?,
        };

        let body = fields
            .into_iter()
            .filter(|(key, _)| key != STATUS_FIELD && key != HEADERS_FIELD)
            .collect();

        Ok(Self {
            name,
            metadata,
            body,
        })
    }

    /// Name of the fixture (`<msisdn>` or `default`)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metadata(&self) -> &FixtureMetadata {
        &self.metadata
    }

    /// Body fields, without the reserved metadata fields
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }
}

fn parse_status(value: Option<&Value>) -> Result<Option<u16>> {
    let value = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(value) => value,
    };

    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        })
        .and_then(|code| u16::try_from(code).ok())
        .map(Some)
        .ok_or_else(|| {
            MockError::invalid_metadata(format!("{STATUS_FIELD} must be an integer, got {value}"))
        })
}

fn parse_headers(value: Option<&Value>) -> Result<Option<Vec<(String, String)>>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(headers)) => Ok(Some(
            headers
                .iter()
                .map(|(name, value)| (name.clone(), header_value_to_string(value)))
                .collect(),
        )),
        Some(other) => Err(MockError::invalid_metadata(format!(
            "{HEADERS_FIELD} must be an object, got {other}"
        ))),
    }
}

/// Strings are used verbatim, everything else by its compact JSON text
fn header_value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
