use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::{sync::mpsc, task::JoinSet};
use tokio_util::sync::CancellationToken;

use crate::{core::raw_msg::RawMsg, domain::query::PostsQuery, infrastructure::api::PostsApi};

/// Side effects the ApiService carries out on behalf of the update loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOperation {
    FetchPosts { query: PostsQuery, generation: u64 },
    FetchSuggestions { query: String, generation: u64 },
    /// Report `RawMsg::SuggestionsDue(generation)` after `delay_ms`
    ScheduleSuggestions { generation: u64, delay_ms: u64 },
}

/// Runs every API request as its own task and reports the outcome as a RawMsg
pub struct ApiService<A> {
    api: A,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<ApiOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    tasks: JoinSet<()>,
}

pub type NewApiService<A> = (
    mpsc::UnboundedSender<ApiOperation>, // op_tx - operations to send
    CancellationToken,                   // shutdown signal
    ApiService<A>,
);

impl<A> ApiService<A>
where
    A: PostsApi + Clone + Send + Sync + 'static,
{
    pub fn new(api: A, raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewApiService<A> {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                api,
                op_rx,
                cancel_token,
                raw_tx,
                tasks: JoinSet::new(),
            },
        )
    }

    /// Run the ApiService in background task
    pub fn run(mut self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(e) = self.run_service().await {
                log::error!("ApiService error: {e}");
                let _ = self
                    .raw_tx
                    .send(RawMsg::Error(format!("ApiService error: {e}")));
            }
        })
    }

    /// Main service loop
    async fn run_service(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    log::info!("ApiService received cancellation signal");
                    break;
                }

                op = self.op_rx.recv() => {
                    match op {
                        Some(op) => self.handle_operation(op),
                        None => {
                            log::info!("ApiService: operation channel closed");
                            break;
                        }
                    }
                }

                Some(joined) = self.tasks.join_next(), if !self.tasks.is_empty() => {
                    if let Err(e) = joined {
                        if e.is_panic() {
                            log::error!("ApiService task panicked: {e}");
                        }
                    }
                }
            }
        }

        let in_flight = self.tasks.len();
        if in_flight > 0 {
            log::info!("ApiService: aborting {in_flight} in-flight requests");
        }
        self.tasks.shutdown().await;
        Ok(())
    }

    fn handle_operation(&mut self, op: ApiOperation) {
        log::debug!("Handling ApiOperation: {op:?}");
        let api = self.api.clone();
        let raw_tx = self.raw_tx.clone();

        match op {
            ApiOperation::FetchPosts { query, generation } => {
                self.tasks.spawn(async move {
                    let msg = match api.fetch_posts(&query).await {
                        Ok(posts) => {
                            log::info!(
                                "Fetched {} posts at offset {} (generation {generation})",
                                posts.len(),
                                query.offset
                            );
                            RawMsg::PostsLoaded { generation, posts }
                        }
                        Err(e) => RawMsg::PostsFailed {
                            generation,
                            error: e.to_string(),
                        },
                    };
                    let _ = raw_tx.send(msg);
                });
            }

            ApiOperation::FetchSuggestions { query, generation } => {
                self.tasks.spawn(async move {
                    let msg = match api.fetch_suggestions(&query).await {
                        Ok(suggestions) => RawMsg::SuggestionsLoaded {
                            generation,
                            suggestions,
                        },
                        Err(e) => RawMsg::SuggestionsFailed {
                            generation,
                            error: e.to_string(),
                        },
                    };
                    let _ = raw_tx.send(msg);
                });
            }

            ApiOperation::ScheduleSuggestions {
                generation,
                delay_ms,
            } => {
                self.tasks.spawn(async move {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    let _ = raw_tx.send(RawMsg::SuggestionsDue(generation));
                });
            }
        }
    }
}
