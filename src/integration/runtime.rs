use std::{collections::VecDeque, mem};

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::core::{
    cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
    translator::translate_raw_to_domain, update::update,
};

/// Integration point between the Elm core and the outside world
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: Option<CmdExecutor>,
    network_commands: usize,
}

impl Runtime {
    /// Create a new Runtime
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: None,
            network_commands: 0,
        }
    }

    /// Create a new Runtime with command executor
    pub fn new_with_executor(initial_state: AppState, executor: CmdExecutor) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(executor);
        runtime
    }

    pub fn set_executor(&mut self, executor: CmdExecutor) {
        self.cmd_executor = Some(executor);
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) -> Result<()> {
        match &mut self.cmd_executor {
            Some(executor) => {
                executor.set_render_request_sender(sender);
                Ok(())
            }
            None => Err(eyre!(
                "No executor available. Use set_executor() or new_with_executor() first."
            )),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (terminal events from the runner)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Raw message sender for background services
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Drain pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands using the command executor
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>> {
        if self.cmd_executor.is_none() {
            return Err(eyre!(
                "No command executor available. Use set_executor() to configure."
            ));
        }

        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        self.network_commands += commands.iter().filter(|cmd| cmd.is_network()).count();

        match &self.cmd_executor {
            Some(executor) => executor.execute_commands(&commands),
            None => Ok(vec![]),
        }
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("update: {msg:?}");
        }
        let state = mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;

        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate queued raw messages and run every resulting message through update
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Terminal events queued by the runner go first
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            self.translate(raw_msg);
            all_commands.extend(self.drain_msg_queue());
        }

        // Then completions from background services
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            self.translate(raw_msg);
            all_commands.extend(self.drain_msg_queue());
        }

        all_commands.extend(self.drain_msg_queue());
        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            posts_count: self.state.feed.len(),
            is_loading: self.state.feed.is_loading(),
            selected_post_index: self.state.feed.selected_index(),
            has_executor: self.cmd_executor.is_some(),
            network_commands: self.network_commands,
        }
    }

    // Each raw message is translated against the state left by the previous one
    fn translate(&mut self, raw_msg: RawMsg) {
        if !raw_msg.is_frequent() {
            log::trace!("translate: {raw_msg:?}");
        }
        let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
        self.msg_queue.extend(domain_msgs);
    }

    fn drain_msg_queue(&mut self) -> Vec<Cmd> {
        let mut commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            commands.extend(self.process_message(msg));
        }
        commands
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub posts_count: usize,
    pub is_loading: bool,
    pub selected_post_index: Option<usize>,
    pub has_executor: bool,
    pub network_commands: usize,
}
