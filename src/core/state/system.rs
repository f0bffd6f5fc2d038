use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    should_quit: bool,
    terminal_size: (u16, u16),
    status_message: Option<String>,
}

impl SystemState {
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                self.terminal_size = (width, height);
                vec![Cmd::RequestRender]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_quit() {
        let mut system = SystemState::default();
        assert!(!system.should_quit());

        let cmds = system.update(SystemMsg::Quit);

        assert!(system.should_quit());
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_resize_records_size_and_requests_render() {
        let mut system = SystemState::default();

        let cmds = system.update(SystemMsg::Resize(80, 24));

        assert_eq!(system.terminal_size(), (80, 24));
        assert_eq!(cmds, vec![Cmd::RequestRender]);
    }

    #[test]
    fn test_status_message_flow() {
        let mut system = SystemState::default();
        assert!(system.status_message().is_none());

        let cmds = system.update(SystemMsg::UpdateStatusMessage("Sorted by likes".to_string()));
        assert!(cmds.is_empty());
        assert_eq!(system.status_message(), Some(&"Sorted by likes".to_string()));

        system.update(SystemMsg::ClearStatusMessage);
        assert!(system.status_message().is_none());
    }

    #[test]
    fn test_show_error() {
        let mut system = SystemState::default();

        system.update(SystemMsg::ShowError("ApiService stopped".to_string()));

        assert_eq!(
            system.status_message(),
            Some(&"Error: ApiService stopped".to_string())
        );
    }
}
