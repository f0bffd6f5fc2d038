use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{core::cmd::Cmd, infrastructure::api_service::ApiOperation};

/// Command executor that bridges Elm commands to the ApiService and the render loop
#[derive(Clone, Default)]
pub struct CmdExecutor {
    api_sender: Option<mpsc::UnboundedSender<ApiOperation>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    /// Create a new command executor with no services attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new command executor routing network commands to the ApiService
    pub fn new_with_api(api_sender: mpsc::UnboundedSender<ApiOperation>) -> Self {
        Self {
            api_sender: Some(api_sender),
            render_req_sender: None,
        }
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::FetchPosts { query, generation } => {
                self.send_api(ApiOperation::FetchPosts {
                    query: query.clone(),
                    generation: *generation,
                })?;
            }

            Cmd::FetchSuggestions { query, generation } => {
                self.send_api(ApiOperation::FetchSuggestions {
                    query: query.clone(),
                    generation: *generation,
                })?;
            }

            Cmd::ScheduleSuggestions {
                generation,
                delay_ms,
            } => {
                self.send_api(ApiOperation::ScheduleSuggestions {
                    generation: *generation,
                    delay_ms: *delay_ms,
                })?;
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_api_sender: self.api_sender.is_some(),
            is_api_sender_closed: self.api_sender.as_ref().map(|sender| sender.is_closed()),
        }
    }

    fn send_api(&self, op: ApiOperation) -> Result<()> {
        if let Some(api_sender) = &self.api_sender {
            api_sender.send(op)?;
        } else {
            log::warn!("{op:?} ignored: ApiService not available");
        }
        Ok(())
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_api_sender: bool,
    pub is_api_sender_closed: Option<bool>,
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::FetchPosts { generation, .. } => format!("FetchPosts(gen {generation})"),
            Cmd::FetchSuggestions { generation, .. } => {
                format!("FetchSuggestions(gen {generation})")
            }
            Cmd::ScheduleSuggestions { generation, .. } => {
                format!("ScheduleSuggestions(gen {generation})")
            }
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
        }
    }
}
