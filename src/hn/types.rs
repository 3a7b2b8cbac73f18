use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A story, job, poll or comment node from `/item/{id}.json`.
///
/// Comments nest recursively; the depth is whatever upstream returns.
/// Flags that upstream omits when false decode to `false`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Item {
    pub id: i64,
    pub title: Option<String>,
    pub points: Option<i64>,
    pub user: Option<String>,
    pub time: i64,
    pub time_ago: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub dead: bool,
    #[serde(rename = "type")]
    #[graphql(name = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub domain: Option<String>,
    #[serde(default)]
    pub comments: Vec<Item>,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub comments_count: i64,
}

/// A Hacker News account from `/user/{id}.json`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct User {
    #[serde(default)]
    pub about: String,
    pub created_time: i64,
    pub created: String,
    pub id: String,
    pub karma: i64,
}

/// Summary projection of an [`Item`] as listed on a feed page.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct FeedItem {
    pub id: i64,
    pub title: String,
    pub points: Option<i64>,
    pub user: Option<String>,
    pub time: i64,
    pub time_ago: String,
    #[serde(default)]
    pub comments_count: i64,
    #[serde(rename = "type")]
    #[graphql(name = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub domain: Option<String>,
}
