use std::time::Duration;

use super::models::AllDocsResponse;
use crate::error::{ImporterError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

pub struct CouchClient {
    base_url: String,
    client: reqwest::Client,
}

impl CouchClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("meet-scoreboard/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn all_docs_url(&self, database: &str) -> String {
        format!("{}/{}/_all_docs?include_docs=true", self.base_url, database)
    }

    pub async fn fetch_all_docs(&self, database: &str) -> Result<AllDocsResponse> {
        let url = self.all_docs_url(database);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImporterError::UnexpectedStatus { url, status });
        }

        let body = response.text().await?;
        let data = serde_json::from_str::<AllDocsResponse>(&body)?;

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_docs_url_trims_trailing_slash() {
        let client = CouchClient::new("http://localhost:5984/").unwrap();
        assert_eq!(
            client.all_docs_url("mspring-open"),
            "http://localhost:5984/mspring-open/_all_docs?include_docs=true"
        );
    }
}
