use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type NewsId = i64;

/// Payload submitted when creating a news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsInfo {
    pub title: String,
    pub context: String,
    pub reporter: String,
    pub country: String,
    pub time: DateTime<Utc>,
}

/// A news item as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub id: NewsId,
    pub info: NewsInfo,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
