// builder.rs
use chrono::Utc;
use log::info;

use crate::id::{IdGenerator, RandomIds};
use crate::news::{News, NewsInfo};
use crate::store::NewsStore;

/// Turns submitted [`NewsInfo`] into complete [`News`] records.
pub struct RecordBuilder {
    ids: Box<dyn IdGenerator>,
}

impl RecordBuilder {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Assigns a fresh id and stamps both timestamps with the same instant.
    pub fn build(&self, info: NewsInfo) -> News {
        let now = Utc::now();
        News {
            id: self.ids.next_id(),
            info,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds a record and inserts it into `store` before handing it back.
    pub fn create(&self, store: &NewsStore, info: NewsInfo) -> News {
        let news = self.build(info);
        store.insert(news.clone());
        info!("created news {} ({:?})", news.id, news.info.title);
        news
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new(Box::new(RandomIds))
    }
}
