use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};
use verifier_api::{ApiError, ApiEvent, ApiHandle, ApiSettings};
use verifier_core::{Effect, Msg, RequestFailure};

/// Executes the effects the core state machine emits and feeds request
/// completions (and timer expiries) back in as messages.
pub struct EffectRunner {
    api: Arc<ApiHandle>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Result<Self, ApiError> {
        let mut settings = ApiSettings::default();
        if let Ok(base_url) = std::env::var("VERIFIER_API_URL") {
            settings.base_url = base_url;
        }
        client_info!("backend at {}", settings.base_url);

        let api = Arc::new(ApiHandle::new(settings)?);
        let runner = Self { api, msg_tx };
        runner.spawn_event_loop();
        Ok(runner)
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitVerification { url, words } => {
                    client_info!("submit url={} words={}", url, words.len());
                    self.api.submit(url, words);
                }
                Effect::LoadUrls => {
                    self.api.load_list();
                }
                Effect::DeleteUrl { url } => {
                    client_info!("delete url={}", url);
                    self.api.delete(url);
                }
                Effect::ScheduleAutoHide {
                    generation,
                    duration_ms,
                } => {
                    // The core drops stale generations, so a timer that
                    // outlives its notification fires harmlessly.
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(Duration::from_millis(duration_ms));
                        let _ = msg_tx.send(Msg::HideTimerElapsed { generation });
                    });
                }
            }
        }
    }

    fn spawn_event_loop(&self) {
        let api = self.api.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = api.try_recv() {
                let msg = match event {
                    ApiEvent::SubmitCompleted { result } => Msg::SubmitFinished {
                        result: result.map_err(log_and_map),
                    },
                    ApiEvent::ListCompleted { result } => Msg::ListLoaded {
                        result: result.map_err(log_and_map),
                    },
                    ApiEvent::DeleteCompleted { url, result } => Msg::RemoveFinished {
                        url,
                        result: result.map_err(log_and_map),
                    },
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn log_and_map(err: ApiError) -> RequestFailure {
    client_warn!("request failed: {}", err);
    match err {
        ApiError::ServerUnreachable | ApiError::Timeout => RequestFailure::ServerUnreachable,
        ApiError::Application { message } => RequestFailure::Server(message),
        other => RequestFailure::Server(other.to_string()),
    }
}
