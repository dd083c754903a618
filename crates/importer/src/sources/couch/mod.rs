mod client;
mod models;

pub use client::CouchClient;
pub use models::{AllDocsResponse, AllDocsRow};

use super::RawDocument;
use crate::{DocumentSource, Result};
use tracing::debug;

/// Reads a competition database from a CouchDB-compatible `_all_docs`
/// endpoint. Each competition identifier is a database name.
pub struct CouchDocumentSource {
    client: CouchClient,
}

impl CouchDocumentSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: CouchClient::new(base_url)?,
        })
    }
}

/// Flattens an `_all_docs` payload into raw documents, dropping rows that
/// carry no document body (deleted or error rows).
pub fn documents_from(response: AllDocsResponse) -> Vec<RawDocument> {
    response
        .rows
        .into_iter()
        .filter_map(|row| match (row.id, row.doc) {
            (Some(id), Some(doc)) => Some(RawDocument::new(id, doc)),
            _ => None,
        })
        .collect()
}

#[async_trait::async_trait]
impl DocumentSource for CouchDocumentSource {
    async fn fetch(&self, competition_id: &str) -> Result<Vec<RawDocument>> {
        let response = self.client.fetch_all_docs(competition_id).await?;
        let documents = documents_from(response);
        debug!(
            "Fetched {} documents for competition {}",
            documents.len(),
            competition_id
        );
        Ok(documents)
    }

    fn name(&self) -> &'static str {
        "CouchDB"
    }
}
