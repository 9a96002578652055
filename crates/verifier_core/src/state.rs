use crate::view_model::{AppViewModel, NotificationView};

/// Default display time for transient notifications.
pub const DEFAULT_NOTIFICATION_MS: u64 = 5_000;
/// Shorter display time used after a confirmed removal.
pub const REMOVE_NOTIFICATION_MS: u64 = 3_000;

/// Fixed message shown when the list endpoint looks unreachable (HTTP 404).
pub const SERVER_DOWN_MESSAGE: &str = "The server may be down.";
/// Fixed message shown after a confirmed removal.
pub const REMOVE_SUCCESS_MESSAGE: &str = "URL removed";
/// Fixed message shown when a removal is rejected.
pub const REMOVE_FAILURE_MESSAGE: &str = "Failed to remove the URL";
/// Fallback when a submit failure carries no readable server message.
pub const SUBMIT_FAILURE_FALLBACK: &str = "Verification request failed";

/// Outcome of one asynchronous request against the backend.
///
/// `Idle` doubles as the "never attempted" initial state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// How a request failed, as far as the core cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    /// Transport-level failure; the backend never answered meaningfully.
    ServerUnreachable,
    /// The backend answered with a structured error message.
    Server(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// The in-progress, not-yet-submitted form state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub url: String,
    pub words: Vec<String>,
    /// `None` until the user has edited the URL field once.
    pub url_valid: Option<bool>,
    /// `None` until the user has edited the keywords field once.
    pub words_valid: Option<bool>,
}

impl FormDraft {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_submittable(&self) -> bool {
        self.url_valid == Some(true) && self.words_valid == Some(true)
    }
}

/// The fetched URL list, shown verbatim in server order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection {
    pub items: Vec<String>,
    pub status: RequestStatus,
    pub error: Option<String>,
    /// URL whose removal is awaiting server confirmation, if any.
    pub pending_removal: Option<String>,
}

/// Single-slot transient banner. A new notification overwrites the
/// previous one; `generation` invalidates any auto-hide armed before it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationState {
    pub visible: bool,
    pub kind: NotificationKind,
    pub message: String,
    pub auto_hide: bool,
    pub duration_ms: u64,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) draft: FormDraft,
    pub(crate) submission: RequestStatus,
    pub(crate) collection: Collection,
    pub(crate) notification: NotificationState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            url: self.draft.url.clone(),
            words: self.draft.words.clone(),
            url_valid: self.draft.url_valid,
            words_valid: self.draft.words_valid,
            can_submit: self.draft.is_submittable() && self.submission != RequestStatus::Pending,
            submission: self.submission,
            items: self.collection.items.clone(),
            collection: self.collection.status,
            collection_error: self.collection.error.clone(),
            notification: NotificationView {
                visible: self.notification.visible,
                kind: self.notification.kind,
                message: self.notification.message.clone(),
            },
            dirty: self.dirty,
        }
    }

    /// Overwrites the notification slot and invalidates any armed auto-hide.
    /// Returns the generation a new timer must carry to still count.
    pub(crate) fn show_notification(
        &mut self,
        kind: NotificationKind,
        message: String,
        auto_hide: bool,
        duration_ms: u64,
    ) -> u64 {
        let generation = self.notification.generation + 1;
        self.notification = NotificationState {
            visible: true,
            kind,
            message,
            auto_hide,
            duration_ms,
            generation,
        };
        generation
    }

    /// Hides the banner but keeps kind/message readable for a fade-out.
    /// Bumping the generation cancels a pending auto-hide.
    pub(crate) fn dismiss_notification(&mut self) {
        self.notification.visible = false;
        self.notification.generation += 1;
    }

    /// Applies a deferred hide only if no later show/dismiss superseded it.
    pub(crate) fn hide_if_current(&mut self, generation: u64) -> bool {
        if generation == self.notification.generation && self.notification.visible {
            self.notification.visible = false;
            true
        } else {
            false
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
