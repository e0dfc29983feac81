// store.rs
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};

use crate::error::NewsError;
use crate::news::{News, NewsId};

/// In-memory news store.
///
/// A single reader/writer lock covers the whole map: lookups run in parallel,
/// inserts are exclusive. Nothing awaits while the lock is held.
pub struct NewsStore {
    data: RwLock<HashMap<NewsId, News>>,
}

impl NewsStore {
    pub fn new() -> Self {
        NewsStore {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Stores `news` under its id, replacing any record already there.
    pub fn insert(&self, news: News) {
        let id = news.id;
        let mut data = self.write();
        if data.insert(id, news).is_some() {
            warn!("news {} already existed and was overwritten", id);
        } else {
            debug!("inserted news {}", id);
        }
    }

    pub fn get(&self, id: NewsId) -> Result<News, NewsError> {
        self.read().get(&id).cloned().ok_or(NewsError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers never leave the map half-updated, so a poisoned lock still
    // guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<NewsId, News>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<NewsId, News>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NewsStore {
    fn default() -> Self {
        Self::new()
    }
}
