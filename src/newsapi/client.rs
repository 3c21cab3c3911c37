use std::sync::Arc;

use super::{Error, Results};

/// Handle on newsapi.org's search endpoint. Cheap to clone, the underlying
/// `reqwest::Client` is shared.
#[derive(Clone)]
pub struct NewsApi {
    http_client: reqwest::Client,
    api_url: Arc<str>,
    api_key: Arc<str>,
}

impl NewsApi {
    pub fn new(http_client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            http_client,
            api_url: Arc::from(api_url.as_str()),
            api_key: Arc::from(api_key.as_str()),
        }
    }

    /// Fetch one page of search results, newest first, English only.
    ///
    /// A single best-effort call: no retries, no timeout beyond the
    /// transport default.
    pub async fn everything(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Results, Error> {
        let page = page.to_string();
        let page_size = page_size.to_string();

        let response = self
            .http_client
            .get(format!("{}/v2/everything", self.api_url))
            .query(&[
                ("q", query),
                ("pageSize", page_size.as_str()),
                ("page", page.as_str()),
                ("apiKey", &*self.api_key),
                ("sortBy", "publishedAt"),
                ("language", "en"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response.text().await?;

        serde_json::from_str(body.as_str()).map_err(|error| {
            log::error!("Failed to parse news API response: {error}, payload: {body}");
            Error::JsonDecode(error)
        })
    }
}
