// ABOUTME: Tag listing and creation operations on the forge.
// ABOUTME: The most recent tag comes first in the forge's listing.

use crate::types::VersionTag;
use async_trait::async_trait;

/// Version tag operations.
#[async_trait]
pub trait TagOps: Send + Sync {
    /// Fetch the most recent version tag for the project.
    async fn latest_tag(&self) -> Result<VersionTag, TagError>;

    /// Create a new version tag, triggering the CI pipeline.
    async fn create_tag(&self, tag: &VersionTag) -> Result<(), TagError>;
}

/// Errors from tag operations.
#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("project has no tags")]
    NoTags,

    #[error("malformed tag listing: {0}")]
    MalformedListing(String),

    #[error("forge rejected the request: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),
}
