//! Service settings
//!
//! Built once at startup from the environment (after loading `.env` if present)
//! and passed explicitly to whatever needs it.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MOCKS_DIR: &str = "./mocks";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Immutable service settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Interface to bind (`HOST`)
    pub host: String,
    /// Listening port (`PORT`)
    pub port: u16,
    /// Absolute fixture directory (`MOCKS_DIR`, relative to the working directory)
    pub mocks_dir: PathBuf,
    /// Default log filter when `RUST_LOG` is unset (`LOG_LEVEL`)
    pub log_level: String,
    /// `LOG_FORMAT`: `pretty` or `json`
    pub log_format: LogFormat,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir().context("Cannot determine working directory")?;
        Self::from_lookup(|key| std::env::var(key).ok(), &cwd)
    }

    /// Read settings through `lookup`, resolving relative paths against `cwd`
    pub fn from_lookup<F>(lookup: F, cwd: &Path) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") => LogFormat::default(),
            Some(raw) if raw.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            Some(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(other) => bail!("Invalid LOG_FORMAT value: {other:?} (expected pretty or json)"),
        };

        let mocks_dir = PathBuf::from(lookup("MOCKS_DIR").unwrap_or_else(|| DEFAULT_MOCKS_DIR.into()));

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
            mocks_dir: cwd.join(mocks_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.into()),
            log_format,
        })
    }

    /// Address to bind the HTTP listener to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned(), Path::new("/srv/app"))
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.bind_address(), "0.0.0.0:3000");
        assert_eq!(settings.mocks_dir, Path::new("/srv/app/./mocks"));
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let settings = settings(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MOCKS_DIR", "fixtures"),
            ("LOG_LEVEL", "debug"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(settings.bind_address(), "127.0.0.1:8080");
        assert_eq!(settings.mocks_dir, Path::new("/srv/app/fixtures"));
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.log_format, LogFormat::Json);
    }

    #[test]
    fn test_absolute_mocks_dir_is_kept() {
        let settings = settings(&[("MOCKS_DIR", "/data/mocks")]).unwrap();
        assert_eq!(settings.mocks_dir, Path::new("/data/mocks"));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(settings(&[("PORT", "http")]).is_err());
        assert!(settings(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_invalid_log_format_is_an_error() {
        assert!(settings(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
