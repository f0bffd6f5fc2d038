//! Shared fixtures for integration tests
#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use color_eyre::eyre::{eyre, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use postfeed::{
    core::state::AppState,
    domain::{
        post::{Post, PostId, PostSuggestion, Suggestions, TopicSuggestion},
        query::{FilterKey, PostsQuery, SortColumn, SortOrder},
    },
    infrastructure::api::{FetchError, PostsApi},
    integration::{app_runner::AppRunner, runtime::Runtime},
};

/// In-memory posts backend that pages, sorts and filters like the real server
#[derive(Clone, Default)]
pub struct FakePostsApi {
    inner: Arc<Mutex<FakeInner>>,
}

#[derive(Default)]
struct FakeInner {
    posts: Vec<Post>,
    topics: Vec<TopicSuggestion>,
    post_requests: Vec<PostsQuery>,
    suggestion_requests: Vec<String>,
    delays: VecDeque<Duration>,
    fail_posts: bool,
}

impl FakePostsApi {
    /// Backend holding posts `1..=count`; a higher id means a newer post
    pub fn with_posts(count: u64) -> Self {
        let api = Self::default();
        api.lock().posts = (1..=count).map(sample_post).collect();
        api
    }

    pub fn with_topics(self, names: &[&str]) -> Self {
        self.lock().topics = names
            .iter()
            .enumerate()
            .map(|(i, name)| TopicSuggestion {
                id: PostId::from(i as u64 + 1),
                name: name.to_string(),
            })
            .collect();
        self
    }

    /// Delay the next posts responses, one entry per request
    pub fn delay_next(&self, delays: impl IntoIterator<Item = Duration>) {
        self.lock().delays.extend(delays);
    }

    pub fn fail_posts(&self, fail: bool) {
        self.lock().fail_posts = fail;
    }

    pub fn post_requests(&self) -> Vec<PostsQuery> {
        self.lock().post_requests.clone()
    }

    pub fn suggestion_requests(&self) -> Vec<String> {
        self.lock().suggestion_requests.clone()
    }

    fn lock(&self) -> MutexGuard<'_, FakeInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PostsApi for FakePostsApi {
    async fn fetch_posts(&self, query: &PostsQuery) -> Result<Vec<Post>, FetchError> {
        let (delay, result) = {
            let mut inner = self.lock();
            inner.post_requests.push(query.clone());
            let delay = inner.delays.pop_front().unwrap_or_default();
            let result = if inner.fail_posts {
                Err(FetchError::Decode {
                    status: 500,
                    source: serde_json::from_str::<Vec<Post>>("{\"error\": \"boom\"}")
                        .expect_err("error body is not a post list"),
                })
            } else {
                Ok(page(&inner.posts, query))
            };
            (delay, result)
        };
        tokio::time::sleep(delay).await;
        result
    }

    async fn fetch_suggestions(&self, query: &str) -> Result<Suggestions, FetchError> {
        let mut inner = self.lock();
        inner.suggestion_requests.push(query.to_string());
        let needle = query.to_lowercase();
        let topics = inner
            .topics
            .iter()
            .filter(|topic| topic.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        let posts = inner
            .posts
            .iter()
            .filter(|post| {
                post.caption
                    .as_deref()
                    .is_some_and(|caption| caption.to_lowercase().contains(&needle))
            })
            .take(3)
            .map(|post| PostSuggestion {
                post_id: post.post_id.clone(),
                caption: post.caption.clone(),
            })
            .collect();
        Ok(Suggestions { topics, posts })
    }
}

pub fn sample_post(id: u64) -> Post {
    Post {
        post_id: PostId::from(id),
        caption: Some(format!("Post number {id}")),
        impressions: (id * 37) % 101 * 10,
        likes: id * 10,
        comments: id % 7,
        post_datetime: format!("2024-01-{:02} {:02}:00:00", 1 + id / 24, id % 24),
    }
}

fn page(posts: &[Post], query: &PostsQuery) -> Vec<Post> {
    let mut matching: Vec<Post> = posts
        .iter()
        .filter(|post| matches_filters(post, query))
        .cloned()
        .collect();
    matching.sort_by(|a, b| {
        let ordering = match query.sort.column {
            SortColumn::Impressions => a.impressions.cmp(&b.impressions),
            SortColumn::Likes => a.likes.cmp(&b.likes),
            SortColumn::Comments => a.comments.cmp(&b.comments),
            SortColumn::PostDatetime => a.post_datetime.cmp(&b.post_datetime),
        };
        match query.sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    matching
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .collect()
}

fn matches_filters(post: &Post, query: &PostsQuery) -> bool {
    query.filters.iter().all(|(key, value)| {
        let bound = value.parse::<u64>().ok();
        match (key, bound) {
            (FilterKey::ImpressionsMin, Some(min)) => post.impressions >= min,
            (FilterKey::ImpressionsMax, Some(max)) => post.impressions <= max,
            (FilterKey::LikesMin, Some(min)) => post.likes >= min,
            (FilterKey::LikesMax, Some(max)) => post.likes <= max,
            (FilterKey::CommentsMin, Some(min)) => post.comments >= min,
            (FilterKey::CommentsMax, Some(max)) => post.comments <= max,
            (FilterKey::DateFrom, _) => post.post_datetime.as_str() >= value,
            (FilterKey::DateTo, _) => post.post_datetime.get(..10).is_some_and(|d| d <= value),
            _ => true,
        }
    })
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Ids of the loaded posts in display order
pub fn post_ids(state: &AppState) -> Vec<String> {
    state
        .feed
        .posts()
        .iter()
        .map(|post| post.post_id.to_string())
        .collect()
}

const SETTLE_ATTEMPTS: usize = 200;
const SETTLE_INTERVAL: Duration = Duration::from_millis(5);

/// Run update cycles until `done` holds, giving background tasks time to answer
pub async fn settle_runtime(
    runtime: &mut Runtime,
    done: impl Fn(&AppState) -> bool,
) -> Result<()> {
    for _ in 0..SETTLE_ATTEMPTS {
        runtime.run_update_cycle()?;
        if done(runtime.state()) {
            return Ok(());
        }
        tokio::time::sleep(SETTLE_INTERVAL).await;
    }
    Err(eyre!("runtime did not reach the expected state"))
}

/// Same as [`settle_runtime`] for a whole runner, drawing frames as requested
pub async fn settle_runner(
    runner: &mut AppRunner,
    done: impl Fn(&AppState) -> bool,
) -> Result<()> {
    for _ in 0..SETTLE_ATTEMPTS {
        runner.process_pending().await?;
        if done(runner.state()) {
            return Ok(());
        }
        tokio::time::sleep(SETTLE_INTERVAL).await;
    }
    Err(eyre!("runner did not reach the expected state"))
}
