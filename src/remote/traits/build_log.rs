// ABOUTME: Build log fetch operations on the forge.
// ABOUTME: Implementations resolve and cache the trace location on first call.

use async_trait::async_trait;

/// Build log operations.
///
/// `fetch_log` must be idempotent and safe to call indefinitely; the watch
/// loop calls it once per poll. The returned text is the raw transported
/// form, escaped line-break markers included.
#[async_trait]
pub trait BuildLogOps: Send + Sync {
    async fn fetch_log(&self) -> Result<String, BuildLogError>;
}

/// Errors from build log operations.
#[derive(Debug, thiserror::Error)]
pub enum BuildLogError {
    #[error("project has no pipeline runs")]
    NoPipelines,

    #[error("malformed pipeline listing: {0}")]
    MalformedListing(String),

    #[error("transport error: {0}")]
    Transport(String),
}
