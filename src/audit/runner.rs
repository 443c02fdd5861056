use indicatif::{ProgressBar, ProgressStyle};

use crate::audit::diff::difference;
use crate::config::AuditMode;
use crate::error::{Error, Result};
use crate::github::GitHubClient;
use crate::models::{DefaultSetupConfig, LanguageCoverage, Report, ReportEntry};
use crate::taxonomy::normalize_languages;

/// Text GitHub returns when code scanning configuration is requested on a
/// repository without the security feature bundle.
const GHAS_DISABLED_MARKER: &str = "Advanced Security must be enabled";

pub struct AuditRunner {
    github: GitHubClient,
}

impl AuditRunner {
    pub fn new(github: GitHubClient) -> Self {
        Self { github }
    }

    /// Walks the resolved audit mode and accumulates one entry per
    /// repository. Repository-level fetch failures degrade to sentinel
    /// entries; an organization enumeration failure aborts the whole run.
    pub async fn run(&self, mode: &AuditMode) -> Result<Report> {
        let mut report = Report::default();

        match mode {
            AuditMode::Repository { owner, name } => {
                tracing::info!("Auditing single repository: {}/{}", owner, name);
                let entry = self.process_repository(owner, name).await;
                report.push(entry);
            }
            AuditMode::Organizations(orgs) => {
                for org in orgs {
                    tracing::info!("Processing organization: {}", org);
                    let repos = self.github.list_repos(org).await?;
                    tracing::info!("Found {} repositories in {}", repos.len(), org);

                    let pb = ProgressBar::new(repos.len() as u64);
                    pb.set_style(
                        ProgressStyle::default_bar()
                            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                            .unwrap()
                            .progress_chars("#>-"),
                    );

                    for repo in repos {
                        pb.set_message(repo.clone());
                        let entry = self.process_repository(org, &repo).await;
                        report.push(entry);
                        pb.inc(1);
                    }

                    pb.finish_with_message(format!("{} audited", org));
                }
            }
        }

        Ok(report)
    }

    async fn process_repository(&self, org: &str, repo: &str) -> ReportEntry {
        tracing::debug!("Processing repository: {}/{}", org, repo);

        let coverage = match self.github.get_repo_languages(org, repo).await {
            Ok(coverage) => coverage,
            Err(e) => {
                tracing::warn!("Failed to fetch languages for {}/{}: {}", org, repo, e);
                LanguageCoverage::default()
            }
        };
        let present = normalize_languages(coverage.keys().map(String::as_str));

        match self.github.get_default_setup(org, repo).await {
            Ok(setup) => configured_entry(org, repo, &present, &setup),
            Err(e) => {
                tracing::warn!("Failed to fetch default setup for {}/{}: {}", org, repo, e);
                unavailable_entry(org, repo, &present, &e)
            }
        }
    }
}

fn configured_entry(
    org: &str,
    repo: &str,
    present: &[&'static str],
    setup: &DefaultSetupConfig,
) -> ReportEntry {
    let status = if setup.state.eq_ignore_ascii_case("configured") {
        "Enabled"
    } else {
        "Disabled"
    };

    let configured = normalize_languages(setup.languages.iter().map(String::as_str));
    let gap = difference(present, &configured);

    ReportEntry {
        organization: org.to_string(),
        repository: repo.to_string(),
        default_setup: status.to_string(),
        languages_in_repo: present.join(", "),
        configured_languages: configured.join(", "),
        unconfigured_languages: gap.join(", "),
    }
}

fn unavailable_entry(
    org: &str,
    repo: &str,
    present: &[&'static str],
    error: &Error,
) -> ReportEntry {
    let status = if error.to_string().contains(GHAS_DISABLED_MARKER) {
        "GHAS is not enabled"
    } else {
        "Unknown"
    };

    ReportEntry {
        organization: org.to_string(),
        repository: repo.to_string(),
        default_setup: status.to_string(),
        languages_in_repo: present.join(", "),
        configured_languages: "Unknown".to_string(),
        unconfigured_languages: "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(state: &str, languages: &[&str]) -> DefaultSetupConfig {
        DefaultSetupConfig {
            state: state.to_string(),
            languages: languages.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_configured_repository_has_no_gap() {
        let entry = configured_entry(
            "acme",
            "widgets",
            &["python"],
            &setup("configured", &["python"]),
        );

        assert_eq!(entry.default_setup, "Enabled");
        assert_eq!(entry.languages_in_repo, "python");
        assert_eq!(entry.configured_languages, "python");
        assert_eq!(entry.unconfigured_languages, "");
    }

    #[test]
    fn test_state_comparison_is_case_insensitive() {
        let entry = configured_entry("acme", "widgets", &[], &setup("Configured", &[]));
        assert_eq!(entry.default_setup, "Enabled");
    }

    #[test]
    fn test_unconfigured_state_reports_disabled() {
        let entry = configured_entry("acme", "widgets", &["go"], &setup("not-configured", &[]));

        assert_eq!(entry.default_setup, "Disabled");
        assert_eq!(entry.unconfigured_languages, "go");
    }

    #[test]
    fn test_gap_lists_present_but_unconfigured() {
        let entry = configured_entry(
            "acme",
            "widgets",
            &["python", "go", "ruby"],
            &setup("configured", &["Go"]),
        );

        assert_eq!(entry.configured_languages, "go");
        assert_eq!(entry.unconfigured_languages, "python, ruby");
    }

    #[test]
    fn test_ghas_disabled_error_is_classified() {
        let error = Error::GitHubApi(
            "Failed to fetch default setup for acme/widgets: 403 Forbidden - \
             Advanced Security must be enabled for this repository to use code scanning."
                .to_string(),
        );
        let entry = unavailable_entry("acme", "widgets", &["python"], &error);

        assert_eq!(entry.default_setup, "GHAS is not enabled");
        assert_eq!(entry.languages_in_repo, "python");
        assert_eq!(entry.configured_languages, "Unknown");
        assert_eq!(entry.unconfigured_languages, "Unknown");
    }

    #[test]
    fn test_other_errors_are_unknown() {
        let error =
            Error::GitHubApi("Failed to fetch default setup: 404 Not Found - Not Found".to_string());
        let entry = unavailable_entry("acme", "widgets", &[], &error);

        assert_eq!(entry.default_setup, "Unknown");
    }
}
