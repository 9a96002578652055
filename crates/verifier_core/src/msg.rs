#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    UrlEdited(String),
    /// User edited the keywords box; the view splits on commas.
    WordsEdited(Vec<String>),
    /// User clicked Verify.
    SubmitClicked,
    /// Outcome of the verification request; `Ok` carries the server message.
    SubmitFinished {
        result: Result<String, crate::RequestFailure>,
    },
    /// The URL list screen became active.
    ListOpened,
    /// Outcome of the list fetch.
    ListLoaded {
        result: Result<Vec<String>, crate::RequestFailure>,
    },
    /// User clicked delete on a list entry.
    RemoveClicked { url: String },
    /// Outcome of the delete request for `url`.
    RemoveFinished {
        url: String,
        result: Result<(), crate::RequestFailure>,
    },
    /// User dismissed the notification banner.
    NotificationDismissed,
    /// A scheduled auto-hide fired; stale generations are ignored.
    HideTimerElapsed { generation: u64 },
    /// Fallback for placeholder wiring.
    NoOp,
}
