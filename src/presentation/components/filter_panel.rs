use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::query::FilterKey,
    presentation::layout::{FeedLayout, APPLY_BUTTON_LABEL, CLEAR_BUTTON_LABEL},
};

const LABEL_WIDTH: usize = 18;

/// Overlay with one input row per filter and the Apply/Clear buttons
#[derive(Debug, Clone, Default)]
pub struct FilterPanelComponent;

impl FilterPanelComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &FeedLayout) {
        if !state.filter.is_visible() || layout.filter_panel.is_empty() {
            return;
        }

        frame.render_widget(Clear, layout.filter_panel);
        frame.render_widget(
            Block::bordered()
                .title(" Filters ")
                .border_style(Style::default().fg(Color::Yellow)),
            layout.filter_panel,
        );

        for key in FilterKey::ALL {
            let area = layout.filter_field(key);
            if area.is_empty() {
                continue;
            }
            frame.render_widget(Paragraph::new(self.field_line(state, key)), area);
        }

        let button = Style::default().fg(Color::Black).bg(Color::Gray);
        frame.render_widget(
            Paragraph::new(APPLY_BUTTON_LABEL).style(button),
            layout.apply_button,
        );
        frame.render_widget(
            Paragraph::new(CLEAR_BUTTON_LABEL).style(button),
            layout.clear_button,
        );
    }

    pub fn field_line(&self, state: &AppState, key: FilterKey) -> Line<'static> {
        let focused = state.filter.focused() == key;
        let label = Span::styled(
            format!("{:<LABEL_WIDTH$}", key.label()),
            Style::default().fg(Color::Gray),
        );
        let value = state.filter.value(key).to_string();
        if focused {
            Line::from(vec![
                label,
                Span::styled(value, Style::default().underlined()),
                Span::styled("_", Style::default().slow_blink()),
            ])
        } else {
            Line::from(vec![label, Span::raw(value)])
        }
    }
}
