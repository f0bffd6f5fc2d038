use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

/// Where the runner reads terminal events from
pub enum EventSource {
    /// Events produced by the terminal itself
    Real(Arc<Mutex<dyn TuiLike + Send>>),
    /// A scripted sequence; `next` yields `None` once it is drained
    Test(VecDeque<Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    #[tokio::test]
    async fn test_scripted_events() {
        let mut source = EventSource::test([Event::Resize(80, 24), Event::Quit]);

        assert_eq!(source.next().await, Some(Event::Resize(80, 24)));
        assert_eq!(source.next().await, Some(Event::Quit));
        assert_eq!(source.next().await, None);
    }

    #[tokio::test]
    async fn test_events_from_tui() -> color_eyre::eyre::Result<()> {
        let tui: Arc<Mutex<dyn TuiLike + Send>> =
            Arc::new(Mutex::new(TestTui::with_events(80, 24, [Event::Tick])?));
        let mut source = EventSource::real(tui);

        assert_eq!(source.next().await, Some(Event::Tick));
        assert_eq!(source.next().await, None);
        Ok(())
    }
}
