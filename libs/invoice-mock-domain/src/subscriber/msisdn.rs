//! MSISDN normalization and the validated `Msisdn` key

use serde::Serialize;
use std::fmt;

/// Strip every non-digit character from a raw identifier
///
/// Any displayable value is accepted and rendered to text first, so numbers
/// normalize the same way as their string form. An absent value yields an
/// empty string.
pub fn normalize_msisdn<T>(value: Option<&T>) -> String
where
    T: fmt::Display + ?Sized,
{
    match value {
        Some(value) => value
            .to_string()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect(),
        None => String::new(),
    }
}

/// Normalized subscriber identifier
///
/// Msisdn is a wrapper around a non-empty, digits-only string. It is the
/// lookup key for fixture files and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Msisdn(String);

impl Msisdn {
    /// Normalize a raw value, returning `None` when no digits remain
    pub fn parse<T>(raw: &T) -> Option<Self>
    where
        T: fmt::Display + ?Sized,
    {
        let digits = normalize_msisdn(Some(raw));
        if digits.is_empty() {
            None
        } else {
            Some(Self(digits))
        }
    }

    /// Get the digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Msisdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Msisdn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Msisdn> for String {
    fn from(msisdn: Msisdn) -> Self {
        msisdn.0
    }
}
