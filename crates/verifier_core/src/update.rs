use crate::state::{
    DEFAULT_NOTIFICATION_MS, REMOVE_FAILURE_MESSAGE, REMOVE_NOTIFICATION_MS,
    REMOVE_SUCCESS_MESSAGE, SERVER_DOWN_MESSAGE, SUBMIT_FAILURE_FALLBACK,
};
use crate::{validate, AppState, Effect, Msg, NotificationKind, RequestFailure, RequestStatus};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlEdited(value) => {
            state.draft.url_valid = Some(validate::validate_url(&value));
            state.draft.url = value;
            settle_submission(&mut state);
            state.mark_dirty();
            Vec::new()
        }
        Msg::WordsEdited(words) => {
            // Keywords are stored trimmed; validation sees the same form.
            let words: Vec<String> = words.iter().map(|word| word.trim().to_owned()).collect();
            state.draft.words_valid = Some(validate::validate_words(&words));
            state.draft.words = words;
            settle_submission(&mut state);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The view disables the button, but the state layer refuses too.
            if !state.draft.is_submittable() || state.submission == RequestStatus::Pending {
                return (state, Vec::new());
            }
            state.submission = RequestStatus::Pending;
            state.mark_dirty();
            vec![Effect::SubmitVerification {
                url: state.draft.url.clone(),
                words: state.draft.words.clone(),
            }]
        }
        Msg::SubmitFinished { result } => {
            if state.submission != RequestStatus::Pending {
                return (state, Vec::new());
            }
            let mut effects = Vec::new();
            match result {
                Ok(message) => {
                    state.submission = RequestStatus::Succeeded;
                    state.draft.reset();
                    notify(
                        &mut state,
                        NotificationKind::Success,
                        message,
                        true,
                        DEFAULT_NOTIFICATION_MS,
                        &mut effects,
                    );
                }
                Err(failure) => {
                    // Draft stays untouched so the user can retry as-is.
                    state.submission = RequestStatus::Failed;
                    let message = match failure {
                        RequestFailure::Server(message) => message,
                        RequestFailure::ServerUnreachable => SUBMIT_FAILURE_FALLBACK.to_owned(),
                    };
                    notify(
                        &mut state,
                        NotificationKind::Error,
                        message,
                        true,
                        DEFAULT_NOTIFICATION_MS,
                        &mut effects,
                    );
                }
            }
            state.mark_dirty();
            effects
        }
        Msg::ListOpened => match state.collection.status {
            // Lazy load on first open; Failed may be retried the same way.
            RequestStatus::Idle | RequestStatus::Failed => {
                state.collection.status = RequestStatus::Pending;
                state.collection.error = None;
                state.mark_dirty();
                vec![Effect::LoadUrls]
            }
            RequestStatus::Pending | RequestStatus::Succeeded => Vec::new(),
        },
        Msg::ListLoaded { result } => {
            if state.collection.status != RequestStatus::Pending {
                return (state, Vec::new());
            }
            let mut effects = Vec::new();
            match result {
                Ok(items) => {
                    state.collection.status = RequestStatus::Succeeded;
                    state.collection.items = items;
                }
                Err(RequestFailure::ServerUnreachable) => {
                    state.collection.status = RequestStatus::Failed;
                    state.collection.error = Some(SERVER_DOWN_MESSAGE.to_owned());
                    notify(
                        &mut state,
                        NotificationKind::Error,
                        SERVER_DOWN_MESSAGE.to_owned(),
                        true,
                        DEFAULT_NOTIFICATION_MS,
                        &mut effects,
                    );
                }
                Err(RequestFailure::Server(message)) => {
                    state.collection.status = RequestStatus::Failed;
                    state.collection.error = Some(message.clone());
                    // Server-reported list failures stay up until dismissed.
                    notify(
                        &mut state,
                        NotificationKind::Error,
                        message,
                        false,
                        DEFAULT_NOTIFICATION_MS,
                        &mut effects,
                    );
                }
            }
            state.mark_dirty();
            effects
        }
        Msg::RemoveClicked { url } => {
            if state.collection.pending_removal.is_some()
                || state.collection.status != RequestStatus::Succeeded
            {
                return (state, Vec::new());
            }
            state.collection.pending_removal = Some(url.clone());
            state.mark_dirty();
            vec![Effect::DeleteUrl { url }]
        }
        Msg::RemoveFinished { url, result } => {
            if state.collection.pending_removal.as_deref() != Some(url.as_str()) {
                return (state, Vec::new());
            }
            state.collection.pending_removal = None;
            let mut effects = Vec::new();
            match result {
                Ok(()) => {
                    // The same URL may appear more than once; drop every occurrence.
                    state.collection.items.retain(|item| item != &url);
                    notify(
                        &mut state,
                        NotificationKind::Success,
                        REMOVE_SUCCESS_MESSAGE.to_owned(),
                        true,
                        REMOVE_NOTIFICATION_MS,
                        &mut effects,
                    );
                }
                Err(_) => {
                    // No optimistic removal: items are only touched on success.
                    notify(
                        &mut state,
                        NotificationKind::Error,
                        REMOVE_FAILURE_MESSAGE.to_owned(),
                        true,
                        DEFAULT_NOTIFICATION_MS,
                        &mut effects,
                    );
                }
            }
            state.mark_dirty();
            effects
        }
        Msg::NotificationDismissed => {
            if !state.notification.visible {
                return (state, Vec::new());
            }
            state.dismiss_notification();
            state.mark_dirty();
            Vec::new()
        }
        Msg::HideTimerElapsed { generation } => {
            if state.hide_if_current(generation) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// A fresh edit puts the previous attempt's outcome behind us.
fn settle_submission(state: &mut AppState) {
    if matches!(
        state.submission,
        RequestStatus::Succeeded | RequestStatus::Failed
    ) {
        state.submission = RequestStatus::Idle;
    }
}

fn notify(
    state: &mut AppState,
    kind: NotificationKind,
    message: String,
    auto_hide: bool,
    duration_ms: u64,
    effects: &mut Vec<Effect>,
) {
    let generation = state.show_notification(kind, message, auto_hide, duration_ms);
    if auto_hide {
        effects.push(Effect::ScheduleAutoHide {
            generation,
            duration_ms,
        });
    }
}
