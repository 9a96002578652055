use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use client_logging::client_debug;

use crate::client::{ApiSettings, ContentApi, ReqwestContentApi};
use crate::{ApiError, ApiEvent};

enum ApiCommand {
    Submit { url: String, words: Vec<String> },
    LoadList,
    Delete { url: String },
}

/// Drives the async [`ContentApi`] from a synchronous front end.
///
/// Commands go to a dedicated thread owning a tokio runtime; completions
/// come back as [`ApiEvent`]s polled with [`ApiHandle::try_recv`]. At most
/// one consumer should poll at a time, matching the single event queue the
/// state machine expects.
pub struct ApiHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
    event_rx: Mutex<mpsc::Receiver<ApiEvent>>,
}

impl ApiHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let api = Arc::new(ReqwestContentApi::new(settings)?);
        Ok(Self::from_api(api))
    }

    /// Wires the handle to any [`ContentApi`]; used by tests with stubs.
    pub fn from_api(api: Arc<dyn ContentApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<ApiEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        }
    }

    pub fn submit(&self, url: impl Into<String>, words: Vec<String>) {
        let _ = self.cmd_tx.send(ApiCommand::Submit {
            url: url.into(),
            words,
        });
    }

    pub fn load_list(&self) {
        let _ = self.cmd_tx.send(ApiCommand::LoadList);
    }

    pub fn delete(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ApiCommand::Delete { url: url.into() });
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(api: &dyn ContentApi, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::Submit { url, words } => {
            client_debug!("submit url={} words={}", url, words.len());
            ApiEvent::SubmitCompleted {
                result: api.submit_check(&url, &words).await,
            }
        }
        ApiCommand::LoadList => ApiEvent::ListCompleted {
            result: api.list_urls().await,
        },
        ApiCommand::Delete { url } => {
            let result = api.delete_url(&url).await;
            ApiEvent::DeleteCompleted { url, result }
        }
    }
}
