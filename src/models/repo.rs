use indexmap::IndexMap;
use serde::Deserialize;

/// Byte counts keyed by raw language name, as returned by the repository
/// languages endpoint. Keys keep their response order so displayed language
/// order is stable across runs.
pub type LanguageCoverage = IndexMap<String, u64>;

#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: String,
}
