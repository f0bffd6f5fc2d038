use crate::{
    core::{cmd::Cmd, msg::filter::FilterMsg},
    domain::{
        query::{FilterKey, FilterKind, Filters},
        text,
    },
};

const MAX_COUNT_LEN: usize = 20;
const MAX_DATE_LEN: usize = 10;

/// Filter panel state: visibility, the raw input values and the focused field
#[derive(Debug, Clone, Default)]
pub struct FilterPanelState {
    visible: bool,
    inputs: [String; FilterKey::ALL.len()],
    focused: FilterKey,
}

impl FilterPanelState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn focused(&self) -> FilterKey {
        self.focused
    }

    pub fn value(&self, key: FilterKey) -> &str {
        &self.inputs[key.index()]
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Empty every input field
    pub fn clear_inputs(&mut self) {
        for input in self.inputs.iter_mut() {
            input.clear();
        }
    }

    /// Collect the non-empty inputs into filters
    ///
    /// Values that are not a valid count or `YYYY-MM-DD` date are left out
    /// and reported in the second element.
    pub fn collect(&self) -> (Filters, Vec<FilterKey>) {
        let mut filters = Filters::new();
        let mut rejected = vec![];
        for key in FilterKey::ALL {
            let value = self.value(key).trim();
            if value.is_empty() {
                continue;
            }
            let valid = match key.kind() {
                FilterKind::Count => value.parse::<u64>().is_ok(),
                FilterKind::Date => text::is_iso_date(value),
            };
            if valid {
                filters.set(key, value);
            } else {
                rejected.push(key);
            }
        }
        (filters, rejected)
    }

    /// Filter-panel-specific update function
    /// Submit and Clear also touch the feed and are handled by the coordinator
    pub fn update(&mut self, msg: FilterMsg) -> Vec<Cmd> {
        match msg {
            FilterMsg::TogglePanel => {
                self.visible = !self.visible;
            }
            FilterMsg::ClosePanel => {
                self.visible = false;
            }
            FilterMsg::Focus(key) => {
                self.focused = key;
            }
            FilterMsg::FocusNext => {
                self.focused = self.focused.next();
            }
            FilterMsg::FocusPrev => {
                self.focused = self.focused.prev();
            }
            FilterMsg::Input(c) => {
                let key = self.focused;
                let input = &mut self.inputs[key.index()];
                let accepted = match key.kind() {
                    FilterKind::Count => c.is_ascii_digit() && input.len() < MAX_COUNT_LEN,
                    FilterKind::Date => {
                        (c.is_ascii_digit() || c == '-') && input.len() < MAX_DATE_LEN
                    }
                };
                if accepted {
                    input.push(c);
                }
            }
            FilterMsg::Backspace => {
                self.inputs[self.focused.index()].pop();
            }
            FilterMsg::Submit | FilterMsg::Clear => {
                log::debug!("{msg:?} is handled by the update coordinator");
            }
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn type_into(panel: &mut FilterPanelState, key: FilterKey, text: &str) {
        panel.update(FilterMsg::Focus(key));
        for c in text.chars() {
            panel.update(FilterMsg::Input(c));
        }
    }

    #[test]
    fn test_toggle_and_close() {
        let mut panel = FilterPanelState::default();
        assert!(!panel.is_visible());

        panel.update(FilterMsg::TogglePanel);
        assert!(panel.is_visible());

        panel.update(FilterMsg::TogglePanel);
        assert!(!panel.is_visible());

        panel.update(FilterMsg::TogglePanel);
        panel.update(FilterMsg::ClosePanel);
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_count_fields_accept_digits_only() {
        let mut panel = FilterPanelState::default();
        type_into(&mut panel, FilterKey::LikesMin, "1a0-");
        assert_eq!(panel.value(FilterKey::LikesMin), "10");
    }

    #[test]
    fn test_date_fields_accept_digits_and_dashes() {
        let mut panel = FilterPanelState::default();
        type_into(&mut panel, FilterKey::DateFrom, "2024-01-05x99");
        assert_eq!(panel.value(FilterKey::DateFrom), "2024-01-05");
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut panel = FilterPanelState::default();
        type_into(&mut panel, FilterKey::CommentsMax, "123");
        panel.update(FilterMsg::Backspace);
        assert_eq!(panel.value(FilterKey::CommentsMax), "12");
        assert_eq!(panel.value(FilterKey::CommentsMin), "");
    }

    #[test]
    fn test_focus_cycles() {
        let mut panel = FilterPanelState::default();
        assert_eq!(panel.focused(), FilterKey::ImpressionsMin);

        panel.update(FilterMsg::FocusPrev);
        assert_eq!(panel.focused(), FilterKey::DateTo);

        panel.update(FilterMsg::FocusNext);
        panel.update(FilterMsg::FocusNext);
        assert_eq!(panel.focused(), FilterKey::ImpressionsMax);
    }

    #[test]
    fn test_collect_only_non_empty_inputs() {
        let mut panel = FilterPanelState::default();
        type_into(&mut panel, FilterKey::LikesMin, "10");

        let (filters, rejected) = panel.collect();

        assert_eq!(filters, Filters::new().with(FilterKey::LikesMin, "10"));
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_collect_rejects_invalid_dates() {
        let mut panel = FilterPanelState::default();
        type_into(&mut panel, FilterKey::DateFrom, "2024-13-01");
        type_into(&mut panel, FilterKey::DateTo, "2024-12-31");

        let (filters, rejected) = panel.collect();

        assert_eq!(filters, Filters::new().with(FilterKey::DateTo, "2024-12-31"));
        assert_eq!(rejected, vec![FilterKey::DateFrom]);
    }

    #[test]
    fn test_clear_inputs() {
        let mut panel = FilterPanelState::default();
        type_into(&mut panel, FilterKey::ImpressionsMin, "100");
        type_into(&mut panel, FilterKey::DateTo, "2024-12-31");

        panel.clear_inputs();

        let (filters, _) = panel.collect();
        assert!(filters.is_empty());
        assert_eq!(panel.value(FilterKey::ImpressionsMin), "");
    }
}
