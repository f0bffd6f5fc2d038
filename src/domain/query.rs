//! Feed query model
//!
//! Sorting, filtering and offset/limit paging parameters of `GET /api/posts`.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

pub const POSTS_PATH: &str = "/api/posts";
pub const SUGGESTIONS_PATH: &str = "/api/search-suggestions";

/// Characters left as-is in query values (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortColumn {
    Impressions,
    Likes,
    Comments,
    #[default]
    PostDatetime,
}

impl SortColumn {
    /// Label of the sort button
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Impressions => "Impressions",
            SortColumn::Likes => "Likes",
            SortColumn::Comments => "Comments",
            SortColumn::PostDatetime => "Date",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sort {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl Sort {
    /// Clicking the active column flips the order, any other column starts descending
    pub fn clicked(self, column: SortColumn) -> Self {
        if self.column == column {
            Self {
                column,
                order: self.order.toggled(),
            }
        } else {
            Self {
                column,
                order: SortOrder::Desc,
            }
        }
    }
}

/// How a filter input is edited and validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Count,
    Date,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FilterKey {
    #[default]
    ImpressionsMin,
    ImpressionsMax,
    LikesMin,
    LikesMax,
    CommentsMin,
    CommentsMax,
    DateFrom,
    DateTo,
}

impl FilterKey {
    pub const ALL: [FilterKey; 8] = [
        FilterKey::ImpressionsMin,
        FilterKey::ImpressionsMax,
        FilterKey::LikesMin,
        FilterKey::LikesMax,
        FilterKey::CommentsMin,
        FilterKey::CommentsMax,
        FilterKey::DateFrom,
        FilterKey::DateTo,
    ];

    pub fn kind(&self) -> FilterKind {
        match self {
            FilterKey::DateFrom | FilterKey::DateTo => FilterKind::Date,
            _ => FilterKind::Count,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::ImpressionsMin => "Impressions from",
            FilterKey::ImpressionsMax => "Impressions to",
            FilterKey::LikesMin => "Likes from",
            FilterKey::LikesMax => "Likes to",
            FilterKey::CommentsMin => "Comments from",
            FilterKey::CommentsMax => "Comments to",
            FilterKey::DateFrom => "Date from",
            FilterKey::DateTo => "Date to",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Active filters; empty values are never stored
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filters(BTreeMap<FilterKey, String>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, or remove the key when the value is blank
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, value);
        }
    }

    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Active filters in declaration order of [`FilterKey`]
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(FilterKey, String)> for Filters {
    fn from_iter<T: IntoIterator<Item = (FilterKey, String)>>(iter: T) -> Self {
        let mut filters = Filters::new();
        for (key, value) in iter {
            filters.set(key, value);
        }
        filters
    }
}

/// One page request of the posts feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsQuery {
    pub offset: usize,
    pub limit: usize,
    pub sort: Sort,
    pub filters: Filters,
}

impl PostsQuery {
    /// Query parameters in wire order: paging, sorting, then active filters
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
            ("sort_by", self.sort.column.to_string()),
            ("sort_order", self.sort.order.to_string()),
        ];
        pairs.extend(
            self.filters
                .iter()
                .map(|(key, value)| (<&'static str>::from(key), value.to_string())),
        );
        pairs
    }

    /// Request path including the encoded query string
    pub fn to_path(&self) -> String {
        let query = self
            .to_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", encode_value(&value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{POSTS_PATH}?{query}")
    }
}

pub fn suggestions_path(query: &str) -> String {
    format!("{SUGGESTIONS_PATH}?query={}", encode_value(query))
}

fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::str::FromStr;

    use super::*;

    fn first_page() -> PostsQuery {
        PostsQuery {
            offset: 0,
            limit: 20,
            sort: Sort::default(),
            filters: Filters::new(),
        }
    }

    #[test]
    fn test_default_query_path() {
        assert_eq!(
            first_page().to_path(),
            "/api/posts?offset=0&limit=20&sort_by=post_datetime&sort_order=desc"
        );
    }

    #[test]
    fn test_filters_follow_declaration_order() {
        let query = PostsQuery {
            filters: Filters::new()
                .with(FilterKey::DateTo, "2024-12-31")
                .with(FilterKey::LikesMin, "10"),
            ..first_page()
        };
        assert_eq!(
            query.to_path(),
            "/api/posts?offset=0&limit=20&sort_by=post_datetime&sort_order=desc\
             &likes_min=10&date_to=2024-12-31"
        );
    }

    #[test]
    fn test_blank_filter_values_are_not_stored() {
        let mut filters = Filters::new().with(FilterKey::LikesMin, "10");
        filters.set(FilterKey::LikesMin, "  ");
        filters.set(FilterKey::LikesMax, "");
        assert!(filters.is_empty());
    }

    #[test]
    fn test_suggestions_path_encodes_query() {
        assert_eq!(
            suggestions_path("css grid & flex"),
            "/api/search-suggestions?query=css%20grid%20%26%20flex"
        );
    }

    #[rstest]
    #[case(SortColumn::Impressions, "impressions")]
    #[case(SortColumn::Likes, "likes")]
    #[case(SortColumn::Comments, "comments")]
    #[case(SortColumn::PostDatetime, "post_datetime")]
    fn test_sort_column_wire_name(#[case] column: SortColumn, #[case] wire: &str) {
        assert_eq!(column.to_string(), wire);
        assert_eq!(SortColumn::from_str(wire).ok(), Some(column));
    }

    #[rstest]
    #[case(Sort::default(), SortColumn::PostDatetime, SortColumn::PostDatetime, SortOrder::Asc)]
    #[case(Sort::default(), SortColumn::Likes, SortColumn::Likes, SortOrder::Desc)]
    #[case(
        Sort { column: SortColumn::Likes, order: SortOrder::Asc },
        SortColumn::Likes,
        SortColumn::Likes,
        SortOrder::Desc
    )]
    #[case(
        Sort { column: SortColumn::Likes, order: SortOrder::Asc },
        SortColumn::Comments,
        SortColumn::Comments,
        SortOrder::Desc
    )]
    fn test_sort_clicked(
        #[case] sort: Sort,
        #[case] clicked: SortColumn,
        #[case] column: SortColumn,
        #[case] order: SortOrder,
    ) {
        assert_eq!(sort.clicked(clicked), Sort { column, order });
    }

    #[test]
    fn test_filter_key_focus_cycle() {
        assert_eq!(FilterKey::ImpressionsMin.next(), FilterKey::ImpressionsMax);
        assert_eq!(FilterKey::DateTo.next(), FilterKey::ImpressionsMin);
        assert_eq!(FilterKey::ImpressionsMin.prev(), FilterKey::DateTo);
        assert_eq!(FilterKey::DateFrom.kind(), FilterKind::Date);
        assert_eq!(FilterKey::CommentsMax.kind(), FilterKind::Count);
    }
}
