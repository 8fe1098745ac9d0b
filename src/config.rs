//! Credentials and list-set configuration
//!
//! The exporter is configured from the environment and the command line:
//! credentials come from the `BSKY_CREDENTIALS` variable as one
//! `identifier:secret` string, and the set of lists to export comes from
//! CLI arguments and/or a plain-text file (one AT-URI per line).

use crate::error::{Error, Result};
use std::path::Path;
use std::str::FromStr;

/// Environment variable holding `identifier:secret`
pub const CREDENTIALS_ENV: &str = "BSKY_CREDENTIALS";

/// Identifier/password pair for `createSession`
///
/// Parsed once at startup and never persisted. The secret may itself
/// contain colons, so parsing splits at the first colon only.
#[derive(Clone)]
pub struct Credentials {
    identifier: String,
    password: String,
}

impl Credentials {
    /// Read credentials from the `BSKY_CREDENTIALS` environment variable
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(CREDENTIALS_ENV).map_err(|_| {
            Error::credentials(format!("{CREDENTIALS_ENV} env var needs to be set"))
        })?;
        raw.parse()
    }

    /// Account identifier (handle or DID)
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// App password
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl FromStr for Credentials {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (identifier, password) = s
            .split_once(':')
            .ok_or_else(|| Error::credentials("expected identifier:secret"))?;

        if identifier.is_empty() {
            return Err(Error::credentials("identifier is empty"));
        }
        if password.is_empty() {
            return Err(Error::credentials("secret is empty"));
        }

        Ok(Self {
            identifier: identifier.to_string(),
            password: password.to_string(),
        })
    }
}

// Manual Debug so the secret never reaches logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Read list AT-URIs from a file: one per line, blank lines and `#`
/// comments skipped, declaration order preserved.
pub fn read_lists_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        Error::config(format!(
            "failed to read lists file {}: {e}",
            path.as_ref().display()
        ))
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}
