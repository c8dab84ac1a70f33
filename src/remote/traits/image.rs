// ABOUTME: Image update operations on the scheduler.
// ABOUTME: Points a running app at a newly built image reference.

use crate::types::{AppName, ArtifactRef};
use async_trait::async_trait;

/// Image update operations.
#[async_trait]
pub trait ImageUpdateOps: Send + Sync {
    /// Update the app definition to reference the new image.
    async fn update_image(
        &self,
        app: &AppName,
        artifact: &ArtifactRef,
    ) -> Result<(), ImageUpdateError>;
}

/// Errors from image update operations.
#[derive(Debug, thiserror::Error)]
pub enum ImageUpdateError {
    #[error("scheduler rejected the update: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),
}
