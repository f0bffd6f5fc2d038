//! Feed state: the paginated, sortable, filterable list of posts

pub mod pagination;

use crate::{
    core::{cmd::Cmd, msg::feed::FeedMsg},
    domain::{
        post::Post,
        query::{Filters, PostsQuery, Sort},
        viewport::Viewport,
    },
};

pub use pagination::PaginationState;

/// Rows occupied by one rendered post: caption, stats and a separator
pub const POST_ITEM_HEIGHT: usize = 3;

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_SCROLL_THRESHOLD: usize = 100;

#[derive(Debug, Clone)]
pub struct FeedState {
    posts: Vec<Post>,
    pagination: PaginationState,
    sort: Sort,
    filters: Filters,
    selected_index: Option<usize>,
    scroll_top: usize,
    viewport_height: usize,
    scroll_threshold: usize,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_SCROLL_THRESHOLD)
    }
}

impl FeedState {
    pub fn new(page_size: usize, scroll_threshold: usize) -> Self {
        Self {
            posts: Vec::new(),
            pagination: PaginationState::new(page_size),
            sort: Sort::default(),
            filters: Filters::new(),
            selected_index: None,
            scroll_top: 0,
            viewport_height: 0,
            scroll_threshold,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.pagination.offset()
    }

    pub fn is_loading(&self) -> bool {
        self.pagination.is_loading()
    }

    pub fn generation(&self) -> u64 {
        self.pagination.generation()
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.selected_index.and_then(|i| self.posts.get(i))
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.scroll_top,
            self.viewport_height,
            self.posts.len() * POST_ITEM_HEIGHT,
        )
    }

    /// The query the next page request will carry
    pub fn next_query(&self) -> PostsQuery {
        PostsQuery {
            offset: self.pagination.offset(),
            limit: self.pagination.page_size(),
            sort: self.sort,
            filters: self.filters.clone(),
        }
    }

    /// Feed-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FeedMsg) -> Vec<Cmd> {
        match msg {
            FeedMsg::FetchNextPage => vec![self.fetch_next_page()],

            FeedMsg::ScrollUp => {
                if let Some(i) = self.selected_index {
                    self.selected_index = Some(i.saturating_sub(1));
                }
                self.ensure_selection_visible();
                self.on_scroll()
            }

            FeedMsg::ScrollDown => {
                if !self.posts.is_empty() {
                    let last = self.posts.len() - 1;
                    self.selected_index = Some(match self.selected_index {
                        Some(i) => (i + 1).min(last),
                        None => 0,
                    });
                }
                self.ensure_selection_visible();
                self.on_scroll()
            }

            FeedMsg::ScrollToTop => {
                if !self.posts.is_empty() {
                    self.selected_index = Some(0);
                }
                self.scroll_top = 0;
                self.on_scroll()
            }

            FeedMsg::ScrollToBottom => {
                if !self.posts.is_empty() {
                    self.selected_index = Some(self.posts.len() - 1);
                }
                self.scroll_top = self.viewport().max_scroll_top();
                self.on_scroll()
            }

            FeedMsg::Sort(column) => {
                self.sort = self.sort.clicked(column);
                self.restart()
            }

            FeedMsg::ApplyFilters(filters) => {
                self.filters = filters;
                self.restart()
            }

            FeedMsg::PostsLoaded { generation, posts } => {
                if !self.pagination.is_current(generation) {
                    log::debug!(
                        "Discarding {} posts from stale generation {generation}",
                        posts.len()
                    );
                    return vec![];
                }
                self.posts.extend(posts);
                self.pagination.advance();
                self.pagination.finish_loading();
                vec![]
            }

            FeedMsg::PostsFailed { generation, error } => {
                if !self.pagination.is_current(generation) {
                    log::debug!("Ignoring failure from stale generation {generation}: {error}");
                    return vec![];
                }
                self.pagination.finish_loading();
                vec![Cmd::LogError {
                    message: format!("Error fetching posts: {error}"),
                }]
            }

            FeedMsg::SetViewportHeight(height) => {
                self.viewport_height = height;
                self.ensure_selection_visible();
                vec![]
            }
        }
    }

    /// Issue a request for the page at the current offset
    pub fn fetch_next_page(&mut self) -> Cmd {
        self.pagination.start_loading();
        Cmd::FetchPosts {
            query: self.next_query(),
            generation: self.pagination.generation(),
        }
    }

    /// Remove every rendered post
    pub fn clear_posts(&mut self) {
        self.posts.clear();
        self.selected_index = None;
        self.scroll_top = 0;
    }

    fn restart(&mut self) -> Vec<Cmd> {
        self.pagination.reset();
        self.clear_posts();
        vec![self.fetch_next_page()]
    }

    fn on_scroll(&mut self) -> Vec<Cmd> {
        if self.viewport().is_near_bottom(self.scroll_threshold) && !self.is_loading() {
            vec![self.fetch_next_page()]
        } else {
            vec![]
        }
    }

    fn ensure_selection_visible(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };
        let top = index * POST_ITEM_HEIGHT;
        let bottom = top + POST_ITEM_HEIGHT;
        if top < self.scroll_top {
            self.scroll_top = top;
        } else if bottom > self.scroll_top + self.viewport_height {
            self.scroll_top = bottom.saturating_sub(self.viewport_height);
        }
    }
}
