//! # Invoice Mock Filesystem Adapter
//!
//! Implements the domain's `FixtureRepository` port on top of a directory of
//! JSON files (`<msisdn>.json` plus `default.json`).

pub mod infrastructure;

pub use infrastructure::FsFixtureRepository;
