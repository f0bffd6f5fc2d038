use crate::{
    core::{cmd::Cmd, msg::search::SearchMsg},
    domain::post::{Suggestion, Suggestions},
};

pub const DEFAULT_DEBOUNCE_MS: u64 = 150;
/// Rows the dropdown can show; selection never goes past them
pub const MAX_SUGGESTIONS: usize = 8;

/// Search box with a debounced suggestion dropdown
#[derive(Debug, Clone)]
pub struct SearchState {
    active: bool,
    query: String,
    generation: u64,
    suggestions: Suggestions,
    selected_index: Option<usize>,
    debounce_ms: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl SearchState {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            active: false,
            query: String::new(),
            generation: 0,
            suggestions: Suggestions::default(),
            selected_index: None,
            debounce_ms,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn suggestions(&self) -> &Suggestions {
        &self.suggestions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected(&self) -> Option<Suggestion<'_>> {
        self.selected_index.and_then(|i| self.suggestions.get(i))
    }

    /// Search-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SearchMsg) -> Vec<Cmd> {
        match msg {
            SearchMsg::Activate => {
                self.active = true;
                vec![]
            }

            SearchMsg::Deactivate => {
                self.active = false;
                vec![]
            }

            SearchMsg::Input(c) => {
                self.query.push(c);
                vec![self.schedule()]
            }

            SearchMsg::Backspace => {
                if self.query.pop().is_some() {
                    vec![self.schedule()]
                } else {
                    vec![]
                }
            }

            SearchMsg::Due(generation) => {
                if generation != self.generation {
                    return vec![];
                }
                let query = self.query.trim();
                if query.is_empty() {
                    self.suggestions = Suggestions::default();
                    self.selected_index = None;
                    vec![]
                } else {
                    vec![Cmd::FetchSuggestions {
                        query: query.to_string(),
                        generation,
                    }]
                }
            }

            SearchMsg::Loaded {
                generation,
                suggestions,
            } => {
                if generation != self.generation {
                    log::debug!("Discarding suggestions from stale generation {generation}");
                    return vec![];
                }
                self.suggestions = suggestions;
                self.suggestions.truncate(MAX_SUGGESTIONS);
                self.selected_index = None;
                vec![]
            }

            SearchMsg::Failed { generation, error } => {
                if generation != self.generation {
                    return vec![];
                }
                vec![Cmd::LogError {
                    message: format!("Error fetching suggestions: {error}"),
                }]
            }

            SearchMsg::SelectNext => {
                let len = self.suggestions.len();
                if len > 0 {
                    self.selected_index = Some(match self.selected_index {
                        Some(i) => (i + 1) % len,
                        None => 0,
                    });
                }
                vec![]
            }

            SearchMsg::SelectPrev => {
                let len = self.suggestions.len();
                if len > 0 {
                    self.selected_index = Some(match self.selected_index {
                        Some(0) | None => len - 1,
                        Some(i) => i - 1,
                    });
                }
                vec![]
            }

            SearchMsg::Select(index) => {
                if index < self.suggestions.len() {
                    self.selected_index = Some(index);
                }
                vec![]
            }

            SearchMsg::OpenSelected => {
                log::debug!("OpenSelected is handled by the update coordinator");
                vec![]
            }
        }
    }

    fn schedule(&mut self) -> Cmd {
        self.generation += 1;
        Cmd::ScheduleSuggestions {
            generation: self.generation,
            delay_ms: self.debounce_ms,
        }
    }
}
