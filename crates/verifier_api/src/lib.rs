//! Verifier API: REST client for the content verification backend.
mod client;
mod handle;
mod types;

pub use client::{ApiSettings, ContentApi, ReqwestContentApi};
pub use handle::ApiHandle;
pub use types::{ApiError, ApiEvent};
