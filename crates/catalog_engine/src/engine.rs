use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_error, engine_info};
use tokio_util::sync::CancellationToken;

use crate::catalog::{load_catalog, FetchPlan};
use crate::fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
use crate::{EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    LoadCatalog,
}

/// Runs catalog loads on a background tokio runtime and reports results as
/// [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, plan: FetchPlan) -> Self {
        Self::with_fetcher(Arc::new(ReqwestPageFetcher::new(settings)), plan)
    }

    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>, plan: FetchPlan) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("Failed to start tokio runtime: {}", err);
                    while let Ok(EngineCommand::LoadCatalog) = cmd_rx.recv() {
                        let _ = event_tx.send(EngineEvent::CatalogFailed(FetchError::new(
                            FailureKind::Network,
                            format!("runtime unavailable: {err}"),
                        )));
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                let cancel = worker_cancel.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), &plan, &cancel, command, event_tx).await;
                });
            }
            engine_info!("Engine command channel closed");
        });

        Self {
            cmd_tx,
            event_rx,
            cancel,
        }
    }

    pub fn load_catalog(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadCatalog);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Aborts in-flight loads. Later loads fail with `Cancelled` immediately.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn handle_command(
    fetcher: &dyn PageFetcher,
    plan: &FetchPlan,
    cancel: &CancellationToken,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadCatalog => {
            let event = match load_catalog(fetcher, plan, cancel).await {
                Ok(catalog) => EngineEvent::CatalogLoaded(catalog),
                Err(err) => EngineEvent::CatalogFailed(err),
            };
            let _ = event_tx.send(event);
        }
    }
}
