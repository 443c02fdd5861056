use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

pub struct Paginator<'a> {
    client: &'a Client,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches every page of a list endpoint, in page order. Accumulation
    /// stops once a page comes back shorter than `per_page`; the first page
    /// error aborts the call and discards what was accumulated.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        base_url: &str,
        per_page: u32,
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let separator = if base_url.contains('?') { "&" } else { "?" };
            let url = format!("{}{}per_page={}&page={}", base_url, separator, per_page, page);

            tracing::debug!("Fetching: {}", url);
            let response = self.client.get(&url).send().await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(Error::GitHubApi(format!(
                    "Failed to fetch {}: {} - {}",
                    url, status, body
                )));
            }

            let items: Vec<T> = response.json().await?;
            let items_count = items.len();
            all_items.extend(items);

            if items_count < per_page as usize {
                break;
            }

            page += 1;
        }

        Ok(all_items)
    }
}
