//! Verifier core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, Collection, FormDraft, NotificationKind, NotificationState, RequestFailure,
    RequestStatus, DEFAULT_NOTIFICATION_MS, REMOVE_FAILURE_MESSAGE, REMOVE_NOTIFICATION_MS,
    REMOVE_SUCCESS_MESSAGE, SERVER_DOWN_MESSAGE, SUBMIT_FAILURE_FALLBACK,
};
pub use update::update;
pub use validate::{validate_url, validate_words, MAX_WORD_LEN};
pub use view_model::{AppViewModel, NotificationView};
