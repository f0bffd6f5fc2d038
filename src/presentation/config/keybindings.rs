use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// Normal-mode actions that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, Deserialize)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    SortByImpressions,
    SortByLikes,
    SortByComments,
    SortByDate,
    ToggleFilters,
    ClearFilters,
    Search,
    OpenPost,
    Quit,
}

/// Flat mapping from key sequences to actions
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, Action>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(keys, action)| {
                parse_key_sequence(&keys)
                    .map(|seq| (seq, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, _>>()
            .map(KeyBindings)
    }
}

/// Parse `"<Ctrl-c>"`, `"<Shift-g>"`, `"<enter>"` or `"<g><g>"`
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| format!("Key sequence must be wrapped in <>: `{raw}`"))?;
    inner.split("><").map(parse_key_event).collect()
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let lower = raw.to_ascii_lowercase();
    let (code, modifiers) = split_modifiers(&lower);
    parse_key_code(code, modifiers)
}

fn split_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut rest = raw;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            rest = r;
        } else {
            return (rest, modifiers);
        }
    }
}

fn parse_key_code(raw: &str, mut modifiers: KeyModifiers) -> Result<KeyEvent, String> {
    let code = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().unwrap_or_default();
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse `{raw}`")),
    };
    Ok(KeyEvent::new(code, modifiers))
}
