use anyhow::Result;

use crate::news::{News, NewsId, NewsInfo};

/// [`NewsClient`] is the interface the client programs use to talk to the news service.
#[async_trait::async_trait]
pub trait NewsClient: Send + Sync + 'static {
    /// Submits a new item and returns the record the server stored.
    async fn create_news(&self, info: &NewsInfo) -> Result<News>;

    /// Fetches a stored item. Returns `None` when the server does not know the id.
    async fn get_news(&self, id: NewsId) -> Result<Option<News>>;
}
