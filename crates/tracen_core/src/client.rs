use async_trait::async_trait;
use crate::query::ContentQuery;
use crate::types::EntryPage;
use crate::Result;

#[async_trait]
pub trait ContentClient: Send + Sync {
    /// Short name of the backend, used in logs
    fn name(&self) -> &str;

    /// Run one query and return the matching page of entries, in the order
    /// requested by the query's sort parameter
    async fn get_entries(&self, query: &ContentQuery) -> Result<EntryPage>;
}
