// news.rs
use chrono::{DateTime, Utc};
use rocket::serde::{Deserialize, Serialize};

pub type NewsId = i64;

/// The user-submitted part of a news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct NewsInfo {
    pub title: String,
    pub context: String,
    pub reporter: String,
    pub country: String,
    pub time: DateTime<Utc>,
}

/// A stored news item. Built once by the [`RecordBuilder`](crate::builder::RecordBuilder)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct News {
    pub id: NewsId,
    pub info: NewsInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
