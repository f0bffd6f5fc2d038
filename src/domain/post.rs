use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Identifier of a post or topic.
///
/// The API is not consistent about the JSON type of identifiers: the posts
/// listing returns database integers while search suggestions stringify them.
/// Both forms are accepted and kept as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for PostId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PostIdVisitor;

        impl de::Visitor<'_> for PostIdVisitor {
            type Value = PostId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or string identifier")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<PostId, E> {
                Ok(PostId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<PostId, E> {
                Ok(PostId(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<PostId, E> {
                Ok(PostId(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<PostId, E> {
                Ok(PostId(v))
            }
        }

        deserializer.deserialize_any(PostIdVisitor)
    }
}

/// A post as returned by `GET /api/posts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: PostId,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub post_datetime: String,
}

impl Post {
    /// Site-relative link of the post detail page
    pub fn link(&self) -> String {
        format!("/post/{}", self.post_id)
    }

    pub fn caption_or_placeholder(&self) -> &str {
        match self.caption.as_deref() {
            Some(caption) if !caption.trim().is_empty() => caption,
            _ => "(no caption)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSuggestion {
    pub id: PostId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSuggestion {
    pub post_id: PostId,
    #[serde(default)]
    pub caption: Option<String>,
}

/// One row of the suggestion dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion<'a> {
    Topic(&'a TopicSuggestion),
    Post(&'a PostSuggestion),
}

impl Suggestion<'_> {
    pub fn label(&self) -> &str {
        match self {
            Suggestion::Topic(topic) => &topic.name,
            Suggestion::Post(post) => post.caption.as_deref().unwrap_or("(no caption)"),
        }
    }

    pub fn link(&self) -> String {
        match self {
            Suggestion::Topic(topic) => format!("/topic/{}", topic.id),
            Suggestion::Post(post) => format!("/post/{}", post.post_id),
        }
    }
}

/// Response of `GET /api/search-suggestions`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(default)]
    pub topics: Vec<TopicSuggestion>,
    #[serde(default)]
    pub posts: Vec<PostSuggestion>,
}

impl Suggestions {
    pub fn len(&self) -> usize {
        self.topics.len() + self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty() && self.posts.is_empty()
    }

    /// Topics first, then posts, in the order the dropdown shows them
    pub fn iter(&self) -> impl Iterator<Item = Suggestion<'_>> {
        self.topics
            .iter()
            .map(Suggestion::Topic)
            .chain(self.posts.iter().map(Suggestion::Post))
    }

    pub fn get(&self, index: usize) -> Option<Suggestion<'_>> {
        self.iter().nth(index)
    }

    /// Keep the first `max` rows in dropdown order; topics are kept before posts
    pub fn truncate(&mut self, max: usize) {
        self.topics.truncate(max);
        self.posts.truncate(max - self.topics.len());
    }
}
