//! Header row: search input, the filter toggle and the suggestion dropdown

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::{
        post::Suggestion,
        text::{single_line, truncate_to_width},
    },
    presentation::layout::{FeedLayout, FILTER_BUTTON_LABEL},
};

const PROMPT: &str = "Search: ";
const PLACEHOLDER: &str = "press / to search";

#[derive(Debug, Clone, Default)]
pub struct SearchBarComponent;

impl SearchBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &FeedLayout) {
        frame.render_widget(Paragraph::new(self.input_line(state)), layout.search);

        let button_style = if state.filter.is_visible() || !state.feed.filters().is_empty() {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(FILTER_BUTTON_LABEL).style(button_style),
            layout.filter_button,
        );
    }

    /// Dropdown drawn over the list; only while the search box has focus
    pub fn view_suggestions(&self, state: &AppState, frame: &mut Frame, layout: &FeedLayout) {
        let search = &state.search;
        if !search.is_active() || search.suggestions().is_empty() {
            return;
        }

        let area = layout.suggestions(search.suggestions().len());
        let width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = search
            .suggestions()
            .iter()
            .map(|suggestion| ListItem::new(Self::suggestion_line(&suggestion, width)))
            .collect();

        let list = List::new(items)
            .block(Block::bordered())
            .highlight_style(Style::default().reversed());
        let mut list_state = ListState::default().with_selected(search.selected_index());

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    pub fn input_line(&self, state: &AppState) -> Line<'static> {
        let search = &state.search;
        let prompt = Span::styled(PROMPT, Style::default().fg(Color::Cyan));
        if search.is_active() {
            Line::from(vec![
                prompt,
                Span::raw(search.query().to_string()),
                Span::styled("_", Style::default().slow_blink()),
            ])
        } else if search.query().is_empty() {
            Line::from(vec![
                prompt,
                Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![prompt, Span::raw(search.query().to_string())])
        }
    }

    fn suggestion_line(suggestion: &Suggestion, width: usize) -> Line<'static> {
        let (tag, color) = match suggestion {
            Suggestion::Topic(_) => ("# ", Color::LightMagenta),
            Suggestion::Post(_) => ("> ", Color::LightBlue),
        };
        let label = truncate_to_width(
            &single_line(suggestion.label()),
            width.saturating_sub(tag.len()),
        );
        Line::from(vec![Span::styled(tag, Style::default().fg(color)), Span::raw(label)])
    }
}
