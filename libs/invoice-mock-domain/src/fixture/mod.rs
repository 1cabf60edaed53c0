//! Fixture domain module
//!
//! A fixture is a canned JSON response for one subscriber (or the default one).
//! This module parses fixtures, separates their reserved metadata fields and
//! composes the response served to the client.

mod compose;
mod entity;

pub use compose::{compose, MockResponse, REQUEST_ECHO_FIELD};
pub use entity::{
    FixtureDocument, FixtureMetadata, DEFAULT_FIXTURE, HEADERS_FIELD, STATUS_FIELD,
};
