use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::Rect;

use crate::{
    core::{
        msg::{feed::FeedMsg, filter::FilterMsg, search::SearchMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::query::SortColumn,
    presentation::{
        config::keybindings::Action,
        layout::{FeedLayout, Hit},
    },
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // Initial page load
        RawMsg::Init => vec![Msg::Feed(FeedMsg::FetchNextPage)],

        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),
        RawMsg::Paste(text) => translate_paste(&text, state),

        // Network events
        RawMsg::PostsLoaded { generation, posts } => {
            vec![Msg::Feed(FeedMsg::PostsLoaded { generation, posts })]
        }
        RawMsg::PostsFailed { generation, error } => {
            vec![Msg::Feed(FeedMsg::PostsFailed { generation, error })]
        }
        RawMsg::SuggestionsDue(generation) => vec![Msg::Search(SearchMsg::Due(generation))],
        RawMsg::SuggestionsLoaded {
            generation,
            suggestions,
        } => vec![Msg::Search(SearchMsg::Loaded {
            generation,
            suggestions,
        })],
        RawMsg::SuggestionsFailed { generation, error } => {
            vec![Msg::Search(SearchMsg::Failed { generation, error })]
        }

        // System events
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    // Context-sensitive key bindings
    if state.search.is_active() {
        translate_search_mode_keys(key)
    } else if state.filter.is_visible() {
        translate_filter_mode_keys(key)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Pasted text is typed into whichever input has focus; line breaks are dropped
fn translate_paste(text: &str, state: &AppState) -> Vec<Msg> {
    let chars = text.chars().filter(|c| !c.is_control());
    if state.search.is_active() {
        chars.map(|c| Msg::Search(SearchMsg::Input(c))).collect()
    } else if state.filter.is_visible() {
        chars.map(|c| Msg::Filter(FilterMsg::Input(c))).collect()
    } else {
        vec![]
    }
}

/// Key bindings while the search box has focus
fn translate_search_mode_keys(key: KeyEvent) -> Vec<Msg> {
    let msg = match key.code {
        KeyCode::Esc => SearchMsg::Deactivate,
        KeyCode::Enter => SearchMsg::OpenSelected,
        KeyCode::Down | KeyCode::Tab => SearchMsg::SelectNext,
        KeyCode::Up | KeyCode::BackTab => SearchMsg::SelectPrev,
        KeyCode::Backspace => SearchMsg::Backspace,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => SearchMsg::Input(c),
        _ => return vec![],
    };
    vec![Msg::Search(msg)]
}

/// Key bindings while the filter panel is open
fn translate_filter_mode_keys(key: KeyEvent) -> Vec<Msg> {
    let msg = match key {
        KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => FilterMsg::Clear,
        KeyEvent {
            code: KeyCode::Esc, ..
        } => FilterMsg::ClosePanel,
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => FilterMsg::Submit,
        KeyEvent {
            code: KeyCode::Tab | KeyCode::Down,
            ..
        } => FilterMsg::FocusNext,
        KeyEvent {
            code: KeyCode::BackTab | KeyCode::Up,
            ..
        } => FilterMsg::FocusPrev,
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => FilterMsg::Backspace,
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers,
            ..
        } if !modifiers.contains(KeyModifiers::CONTROL) => FilterMsg::Input(c),
        _ => return vec![],
    };
    vec![Msg::Filter(msg)]
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action) -> Vec<Msg> {
    match action {
        Action::ScrollUp => vec![Msg::Feed(FeedMsg::ScrollUp)],
        Action::ScrollDown => vec![Msg::Feed(FeedMsg::ScrollDown)],
        Action::ScrollToTop => vec![Msg::Feed(FeedMsg::ScrollToTop)],
        Action::ScrollToBottom => vec![Msg::Feed(FeedMsg::ScrollToBottom)],
        Action::SortByImpressions => vec![Msg::Feed(FeedMsg::Sort(SortColumn::Impressions))],
        Action::SortByLikes => vec![Msg::Feed(FeedMsg::Sort(SortColumn::Likes))],
        Action::SortByComments => vec![Msg::Feed(FeedMsg::Sort(SortColumn::Comments))],
        Action::SortByDate => vec![Msg::Feed(FeedMsg::Sort(SortColumn::PostDatetime))],
        Action::ToggleFilters => vec![Msg::Filter(FilterMsg::TogglePanel)],
        Action::ClearFilters => vec![Msg::Filter(FilterMsg::Clear)],
        Action::Search => vec![Msg::Search(SearchMsg::Activate)],
        Action::OpenPost => vec![Msg::OpenSelectedPost],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
    }
}

/// Translates mouse input by hit-testing against the current screen layout
fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    match mouse.kind {
        MouseEventKind::ScrollDown => vec![Msg::Feed(FeedMsg::ScrollDown)],
        MouseEventKind::ScrollUp => vec![Msg::Feed(FeedMsg::ScrollUp)],
        MouseEventKind::Down(MouseButton::Left) => translate_click(mouse.column, mouse.row, state),
        _ => vec![],
    }
}

fn translate_click(column: u16, row: u16, state: &AppState) -> Vec<Msg> {
    let (width, height) = state.system.terminal_size();
    let layout = FeedLayout::new(Rect::new(0, 0, width, height));
    let panel_visible = state.filter.is_visible();
    let suggestion_count = if state.search.is_active() {
        state.search.suggestions().len()
    } else {
        0
    };

    let hit = layout.hit(column, row, panel_visible, suggestion_count);
    let mut msgs = vec![];

    // Leaving the search box
    if state.search.is_active() && !matches!(hit, Some(Hit::Search | Hit::Suggestion(_))) {
        msgs.push(Msg::Search(SearchMsg::Deactivate));
    }

    // Clicks outside the panel that are not on its button close it
    let inside_panel = matches!(
        hit,
        Some(
            Hit::FilterButton
                | Hit::FilterField(_)
                | Hit::FilterPanel
                | Hit::ApplyButton
                | Hit::ClearButton
        )
    );
    if panel_visible && !inside_panel {
        msgs.push(Msg::Filter(FilterMsg::ClosePanel));
    }

    match hit {
        Some(Hit::FilterButton) => msgs.push(Msg::Filter(FilterMsg::TogglePanel)),
        Some(Hit::FilterField(key)) => msgs.push(Msg::Filter(FilterMsg::Focus(key))),
        Some(Hit::ApplyButton) => msgs.push(Msg::Filter(FilterMsg::Submit)),
        Some(Hit::ClearButton) => msgs.push(Msg::Filter(FilterMsg::Clear)),
        Some(Hit::SortButton(column)) => msgs.push(Msg::Feed(FeedMsg::Sort(column))),
        Some(Hit::Search) if !state.search.is_active() => {
            msgs.push(Msg::Search(SearchMsg::Activate));
        }
        Some(Hit::Suggestion(index)) => {
            msgs.push(Msg::Search(SearchMsg::Select(index)));
            msgs.push(Msg::Search(SearchMsg::OpenSelected));
        }
        Some(Hit::Search | Hit::FilterPanel | Hit::List | Hit::Status) | None => {}
    }
    msgs
}
