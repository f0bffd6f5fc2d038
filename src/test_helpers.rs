//! Shared builders for unit tests

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::cmd::Cmd,
    domain::{
        post::{Post, PostId},
        query::PostsQuery,
    },
};

/// A post whose counters are derived from its id
pub fn post(id: u64) -> Post {
    Post {
        post_id: PostId::from(id),
        caption: Some(format!("Post number {id}")),
        impressions: id * 100,
        likes: id * 10,
        comments: id,
        post_datetime: "2024-01-15 09:30:00".to_string(),
    }
}

/// `count` consecutive posts starting at id `start`
pub fn posts(start: u64, count: usize) -> Vec<Post> {
    (start..start + count as u64).map(post).collect()
}

/// The query of the first `FetchPosts` among `cmds`
pub fn fetched_query(cmds: &[Cmd]) -> Option<&PostsQuery> {
    cmds.iter().find_map(|cmd| match cmd {
        Cmd::FetchPosts { query, .. } => Some(query),
        _ => None,
    })
}

/// Every `FetchPosts` path among `cmds`
pub fn fetched_paths(cmds: &[Cmd]) -> Vec<String> {
    cmds.iter()
        .filter_map(|cmd| match cmd {
            Cmd::FetchPosts { query, .. } => Some(query.to_path()),
            _ => None,
        })
        .collect()
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
