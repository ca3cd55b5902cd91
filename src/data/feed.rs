//! Upstream feed API collaborator.
//!
//! Pages through the interaction feed endpoints and yields raw post records
//! for the offline ingest pipeline. The base URL and access token are
//! explicit constructor inputs so tests can point the client at a fake
//! endpoint.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::Mood;

/// HTTP header carrying the feed API access token
const TOKEN_HEADER: &str = "Flic-Token";

/// The four interaction feeds exposed by the upstream API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostFeed {
    Viewed,
    Liked,
    Inspired,
    Rated,
}

impl PostFeed {
    pub fn path(&self) -> &'static str {
        match self {
            PostFeed::Viewed => "/posts/view",
            PostFeed::Liked => "/posts/like",
            PostFeed::Inspired => "/posts/inspire",
            PostFeed::Rated => "/posts/rating",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PostFeed::Viewed => "viewed",
            PostFeed::Liked => "liked",
            PostFeed::Inspired => "inspired",
            PostFeed::Rated => "rated",
        }
    }
}

/// One page of the upstream feed response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub posts: Vec<RawPost>,
}

/// Raw post record as returned by the feed API; unknown fields are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub category: Option<RawCategory>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub mood: Option<Mood>,
}

/// Nested category object on a raw post
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Source of raw feed pages
///
/// Implemented by [`FeedClient`] for the real API; tests substitute an
/// in-memory fake.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch a single page of the given feed. Pages are 1-indexed.
    async fn fetch_page(&self, feed: PostFeed, page: u32, page_size: u32) -> AppResult<FeedPage>;

    /// Fetch every page of the given feed until a short page ends the walk
    async fn fetch_all(&self, feed: PostFeed, page_size: u32) -> AppResult<Vec<RawPost>> {
        let mut posts = Vec::new();
        let mut page = 1;

        loop {
            let fetched = self.fetch_page(feed, page, page_size).await?;
            let count = fetched.posts.len();
            posts.extend(fetched.posts);

            tracing::debug!(feed = feed.name(), page, count, "Feed page fetched");

            if (count as u32) < page_size {
                break;
            }
            page += 1;
        }

        tracing::info!(feed = feed.name(), total = posts.len(), "Feed fetched");
        Ok(posts)
    }
}

/// HTTP client for the upstream feed API
#[derive(Clone)]
pub struct FeedClient {
    http_client: HttpClient,
    api_url: String,
    api_token: String,
}

impl FeedClient {
    pub fn new(api_url: String, api_token: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            api_token,
        }
    }
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch_page(&self, feed: PostFeed, page: u32, page_size: u32) -> AppResult<FeedPage> {
        let url = format!("{}{}", self.api_url, feed.path());

        let response = self
            .http_client
            .get(&url)
            .header(TOKEN_HEADER, &self.api_token)
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Feed API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}
