use crate::Result;
use crate::sources::RawDocument;

/// Anything that can hand over the full document set of one competition.
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, competition_id: &str) -> Result<Vec<RawDocument>>;

    fn name(&self) -> &'static str;
}
