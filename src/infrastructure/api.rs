//! HTTP access to the posts backend

use std::{future::Future, time::Duration};

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{
    post::{Post, Suggestions},
    query::{suggestions_path, PostsQuery},
};

/// Any failure of a single fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Read access to the feed backend
pub trait PostsApi {
    fn fetch_posts(
        &self,
        query: &PostsQuery,
    ) -> impl Future<Output = Result<Vec<Post>, FetchError>> + Send;

    fn fetch_suggestions(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Suggestions, FetchError>> + Send;
}

/// `PostsApi` over HTTP with reqwest
#[derive(Clone, Debug)]
pub struct HttpPostsApi {
    http: Client,
    base_url: String,
}

impl HttpPostsApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// The body is decoded whatever the status; an error page is a decode failure
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url(path);
        log::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { status, source })
    }
}

impl PostsApi for HttpPostsApi {
    async fn fetch_posts(&self, query: &PostsQuery) -> Result<Vec<Post>, FetchError> {
        self.get_json(&query.to_path()).await
    }

    async fn fetch_suggestions(&self, query: &str) -> Result<Suggestions, FetchError> {
        self.get_json(&suggestions_path(query)).await
    }
}
