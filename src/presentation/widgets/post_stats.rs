use ratatui::prelude::*;
use thousands::Separable;

/// Engagement counters of a post, rendered on one line
pub struct PostStats {
    impressions: u64,
    likes: u64,
    comments: u64,
}

impl PostStats {
    pub fn new(impressions: u64, likes: u64, comments: u64) -> Self {
        Self {
            impressions,
            likes,
            comments,
        }
    }
}

impl From<PostStats> for Line<'static> {
    fn from(value: PostStats) -> Self {
        Line::from(vec![
            Span::styled(
                format!("{} impressions", value.impressions.separate_with_commas()),
                Style::default().fg(Color::LightBlue),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} likes", value.likes.separate_with_commas()),
                Style::default().fg(Color::LightRed),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} comments", value.comments.separate_with_commas()),
                Style::default().fg(Color::LightGreen),
            ),
        ])
    }
}
