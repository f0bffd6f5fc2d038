use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::{
    sync::{mpsc, Mutex},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{cmd_executor::CmdExecutor, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        api::{HttpPostsApi, PostsApi},
        api_service::ApiService,
        config::Config,
        tui::{event_source::EventSource, real::RealTui, Event, Frame, TuiLike},
    },
    integration::{coalescer::Coalescer, runtime::Runtime},
    presentation::components::Components,
};

/// Drives the Elm runtime: terminal events in, API completions in, frames out
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    event_source: EventSource,
    // Presentation components (stateless/pure rendering)
    components: Components,
    // Render requests emitted by Cmd::RequestRender
    render_req_rx: mpsc::UnboundedReceiver<()>,
    coalescer: Coalescer,
    // For service termination
    api_cancel: CancellationToken,
    api_task: Option<JoinHandle<()>>,
}

impl AppRunner {
    /// Runner talking to the configured HTTP server through a crossterm terminal
    pub async fn new_with_real(config: Config, tui: Arc<Mutex<RealTui>>) -> Result<Self> {
        let api = HttpPostsApi::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )?;
        log::info!("Using posts API at {}", api.base_url());

        let tui: Arc<Mutex<dyn TuiLike + Send>> = tui;
        let event_source = EventSource::real(tui.clone());
        Self::new_with_api(config, api, tui, event_source)
    }

    /// Runner over any API implementation and terminal; the ApiService starts immediately
    pub fn new_with_api<A>(
        config: Config,
        api: A,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        event_source: EventSource,
    ) -> Result<Self>
    where
        A: PostsApi + Clone + Send + Sync + 'static,
    {
        let mut runtime = Runtime::new(AppState::new_with_config(config));

        let (api_tx, api_cancel, api_service) = ApiService::new(api, runtime.get_raw_sender());
        let api_task = api_service.run();

        let (render_tx, render_req_rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new_with_api(api_tx);
        executor.set_render_request_sender(render_tx);
        runtime.set_executor(executor);

        Ok(Self {
            runtime,
            tui,
            event_source,
            components: Components::new(),
            render_req_rx,
            coalescer: Coalescer::new(),
            api_cancel,
            api_task: Some(api_task),
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Run the main loop until quit, then stop the ApiService and restore the terminal
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.start().await?;

        let result = loop {
            match self.run_one_cycle().await {
                Ok(true) => continue,
                Ok(false) => break Ok(()),
                Err(e) => break Err(e),
            }
        };

        self.shutdown().await;
        let exited = self.tui.lock().await.exit();
        result.and(exited)
    }

    /// Queue the startup messages: the terminal size and the first page load
    pub async fn start(&mut self) -> Result<()> {
        let size = self.tui.lock().await.size()?;
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));
        self.runtime.send_raw_msg(RawMsg::Init);
        Ok(())
    }

    /// One loop iteration: wait for an event, run the update cycle, draw if needed
    ///
    /// Returns `false` once the app should stop, either because quit was
    /// requested or because the event source is exhausted.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let exhausted = match self.event_source.next().await {
            Some(event) => {
                self.handle_event(event);
                false
            }
            None => true,
        };

        self.process_pending().await?;
        Ok(!exhausted && !self.runtime.state().system.should_quit())
    }

    /// Run the update cycle on whatever is queued and draw if anything asked for it
    pub async fn process_pending(&mut self) -> Result<()> {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        while self.render_req_rx.try_recv().is_ok() {
            self.coalescer.request_render();
        }

        let plan = self.coalescer.take();
        if let Some((width, height)) = plan.resize {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
        }
        if plan.render {
            self.render().await?;
        }
        Ok(())
    }

    /// Stop the ApiService and wait for its task to finish
    pub async fn shutdown(&mut self) {
        self.api_cancel.cancel();
        if let Some(task) = self.api_task.take() {
            if let Err(e) = task.await {
                log::warn!("ApiService task did not finish cleanly: {e}");
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Quit | Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            Event::Render => self.coalescer.frame_due(),
            Event::Resize(w, h) => {
                self.coalescer.resize(w, h);
                self.runtime.send_raw_msg(RawMsg::Resize(w, h));
            }
            Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse)),
            Event::Paste(text) => self.runtime.send_raw_msg(RawMsg::Paste(text)),
            Event::Error => log::warn!("Terminal reported an input error"),
            Event::Init | Event::FocusGained | Event::FocusLost => {}
        }
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        let mut tui = self.tui.lock().await;
        tui.draw(&mut |frame: &mut Frame<'_>| components.render(frame, state))
    }
}

impl Drop for AppRunner {
    fn drop(&mut self) {
        self.api_cancel.cancel();
    }
}
