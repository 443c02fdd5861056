use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A repository's code scanning default setup configuration. Only `state`
/// and `languages` feed the audit; the rest is metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultSetupConfig {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub languages: Vec<String>,
    pub query_suite: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub schedule: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_configured_setup() {
        let setup: DefaultSetupConfig = serde_json::from_str(
            r#"{
                "state": "configured",
                "languages": ["javascript", "python"],
                "query_suite": "default",
                "updated_at": "2023-01-19T11:21:34Z",
                "schedule": "weekly"
            }"#,
        )
        .unwrap();

        assert_eq!(setup.state, "configured");
        assert_eq!(setup.languages, vec!["javascript", "python"]);
        assert_eq!(setup.query_suite.as_deref(), Some("default"));
        assert!(setup.updated_at.is_some());
    }

    #[test]
    fn test_missing_fields_default() {
        let setup: DefaultSetupConfig =
            serde_json::from_str(r#"{"state": "not-configured"}"#).unwrap();

        assert_eq!(setup.state, "not-configured");
        assert!(setup.languages.is_empty());
        assert!(setup.updated_at.is_none());
    }
}
