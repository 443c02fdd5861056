use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN")
            .map_err(|_| Error::Config("GITHUB_TOKEN environment variable not set".to_string()))?;

        let api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| "https://api.github.com".to_string());

        Ok(Self {
            github_token,
            api_url,
        })
    }
}

/// Options for one audit invocation, built from parsed CLI flags.
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    pub organizations: Option<String>,
    pub repository: Option<String>,
    pub csv_output: Option<PathBuf>,
}

/// What the audit should walk, decided once before any network activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditMode {
    Repository { owner: String, name: String },
    Organizations(Vec<String>),
}

impl AuditOptions {
    /// Resolves the flags into an audit mode. A single repository takes
    /// precedence over the organization list. `Ok(None)` means there is
    /// nothing to audit and the caller should show help instead.
    pub fn mode(&self) -> Result<Option<AuditMode>> {
        if let Some(ref repository) = self.repository {
            let (owner, name) = parse_repository(repository)?;
            return Ok(Some(AuditMode::Repository { owner, name }));
        }

        let organizations: Vec<String> = self
            .organizations
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|org| !org.is_empty())
            .map(str::to_owned)
            .collect();

        if organizations.is_empty() {
            return Ok(None);
        }

        Ok(Some(AuditMode::Organizations(organizations)))
    }
}

/// Splits an `owner/name` identifier on the first slash. Both parts must be
/// non-empty.
fn parse_repository(raw: &str) -> Result<(String, String)> {
    match raw.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
            Ok((owner.to_string(), name.to_string()))
        }
        _ => Err(Error::InvalidRepository(raw.to_string())),
    }
}
