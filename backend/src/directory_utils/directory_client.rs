//! HTTP client for the `/search?country=` directory endpoint.

use common::{
    suggestions::{project_countries, suggestion_prefix},
    university::UniversityRecord,
};

use crate::directory_utils::directory_config::{directory_url_from, get_directory_url};

#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("university-search")
            .build()?;
        Ok(Self { http, base_url: directory_url_from(Some(base_url.into())) })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(get_directory_url())
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    /// Records for `country`, in the order the directory returned them.
    pub async fn search(&self, country: &str) -> anyhow::Result<Vec<UniversityRecord>> {
        let response = self
            .http
            .get(self.search_url())
            .query(&[("country", country)])
            .send()
            .await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        tracing::debug!("DIRECTORY RESPONSE: len = {}", response_txt.len());
        let records: Vec<UniversityRecord> = serde_json::from_str(&response_txt)?;
        Ok(records)
    }

    /// Countries of every record matching the first character of `partial`.
    ///
    /// Blank input yields no suggestions and sends no request.
    pub async fn suggest(&self, partial: &str) -> anyhow::Result<Vec<String>> {
        let Some(prefix) = suggestion_prefix(partial) else {
            return Ok(vec![]);
        };
        self.suggest_for_prefix(&prefix).await
    }

    /// Countries of every record matching an already derived lookup prefix.
    ///
    /// The prefix is sent as is, so a lone space still reaches the directory.
    pub async fn suggest_for_prefix(&self, prefix: &str) -> anyhow::Result<Vec<String>> {
        let records = self.search(prefix).await?;
        Ok(project_countries(&records))
    }
}
