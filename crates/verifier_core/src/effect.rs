#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the draft to the verification endpoint.
    SubmitVerification { url: String, words: Vec<String> },
    /// GET the stored URL list.
    LoadUrls,
    /// DELETE one URL by value.
    DeleteUrl { url: String },
    /// Arm the notification auto-hide timer for this generation.
    ScheduleAutoHide { generation: u64, duration_ms: u64 },
}
