use reqwest::{header, Client, Response};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::models::{DefaultSetupConfig, LanguageCoverage, Organization, RepoSummary};

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.github_token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("ghas-audit/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Organizations visible to the authenticated caller. A single call;
    /// errors propagate to the caller untouched.
    pub async fn list_orgs(&self) -> Result<Vec<String>> {
        let url = format!("{}/user/orgs", self.base_url);
        tracing::debug!("Fetching organizations for the authenticated user");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(api_error("Failed to list organizations".to_string(), response).await);
        }

        let orgs: Vec<Organization> = response.json().await?;
        Ok(orgs.into_iter().map(|org| org.login).collect())
    }

    /// Repository names in an organization, in listing order.
    pub async fn list_repos(&self, org: &str) -> Result<Vec<String>> {
        let url = format!("{}/orgs/{}/repos", self.base_url, org);
        let paginator = Paginator::new(&self.client);
        tracing::debug!("Fetching repositories for organization: {}", org);

        let repos: Vec<RepoSummary> = paginator.fetch_all(&url, 100).await?;
        Ok(repos.into_iter().map(|repo| repo.name).collect())
    }

    pub async fn get_repo_languages(&self, owner: &str, repo: &str) -> Result<LanguageCoverage> {
        let url = format!("{}/repos/{}/{}/languages", self.base_url, owner, repo);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(api_error(
                format!("Failed to fetch languages for {}/{}", owner, repo),
                response,
            )
            .await);
        }

        Ok(response.json().await?)
    }

    pub async fn get_default_setup(&self, owner: &str, repo: &str) -> Result<DefaultSetupConfig> {
        let url = format!(
            "{}/repos/{}/{}/code-scanning/default-setup",
            self.base_url, owner, repo
        );

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(api_error(
                format!("Failed to fetch default setup for {}/{}", owner, repo),
                response,
            )
            .await);
        }

        Ok(response.json().await?)
    }
}

/// Folds a non-2xx response into an error carrying the status and the API
/// body's `message` text, which callers match on to classify failures.
async fn api_error(context: String, response: Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or(body);

    Error::GitHubApi(format!("{}: {} - {}", context, status, message))
}
