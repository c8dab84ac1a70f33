// ABOUTME: Deployment status operations on the scheduler.
// ABOUTME: Status text plus the app's externally reachable origin.

use crate::types::AppName;
use async_trait::async_trait;

/// Deployment status operations.
#[async_trait]
pub trait StatusOps: Send + Sync {
    /// Fetch the current status text and origin address for an app.
    async fn fetch_status(&self, app: &AppName) -> Result<AppStatus, StatusError>;
}

/// A point-in-time deployment status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppStatus {
    /// Raw status text, e.g. `Running` or `Deploying`.
    pub state: String,
    /// Externally reachable address of the deployed instance.
    pub origin: String,
}

/// Errors from status operations.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// The status indicator is not observable yet; expected briefly after
    /// an image submit.
    #[error("status for {0} is not visible yet")]
    NotVisible(String),

    #[error("malformed status document: {0}")]
    MalformedStatus(String),

    #[error("transport error: {0}")]
    Transport(String),
}
