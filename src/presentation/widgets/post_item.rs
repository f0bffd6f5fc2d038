use ratatui::prelude::*;

use crate::{
    core::state::feed::POST_ITEM_HEIGHT,
    domain::{
        post::Post,
        text::{format_post_datetime, single_line, truncate_to_width},
    },
    presentation::widgets::post_stats::PostStats,
};

/// One entry of the feed list: caption, counters with date, and a spacer row
#[derive(Clone, Debug)]
pub struct PostItem<'a> {
    post: &'a Post,
    highlight: bool,
}

impl<'a> PostItem<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            post,
            highlight: false,
        }
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Exactly `POST_ITEM_HEIGHT` lines fitted to `width` columns
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let caption = truncate_to_width(
            &single_line(self.post.caption_or_placeholder()),
            width as usize,
        );
        let caption = Line::styled(caption, Style::default().bold());

        let mut meta: Line<'static> = PostStats::new(
            self.post.impressions,
            self.post.likes,
            self.post.comments,
        )
        .into();
        meta.push_span(Span::raw("  "));
        meta.push_span(Span::styled(
            format_post_datetime(&self.post.post_datetime),
            Style::default().fg(Color::DarkGray),
        ));

        let mut lines = vec![caption, meta];
        if self.highlight {
            let style = Style::default().bg(Color::Indexed(236));
            lines = lines.into_iter().map(|line| line.style(style)).collect();
        }
        lines.resize(POST_ITEM_HEIGHT, Line::default());
        lines
    }
}
