use crate::{NotificationKind, RequestStatus};

/// Read-only projection of [`crate::AppState`] for the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url: String,
    pub words: Vec<String>,
    pub url_valid: Option<bool>,
    pub words_valid: Option<bool>,
    /// True when both fields validate and no submission is in flight.
    pub can_submit: bool,
    pub submission: RequestStatus,
    pub items: Vec<String>,
    pub collection: RequestStatus,
    pub collection_error: Option<String>,
    pub notification: NotificationView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationView {
    pub visible: bool,
    pub kind: NotificationKind,
    pub message: String,
}
