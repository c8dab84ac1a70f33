// ABOUTME: Error kinds for release pipeline stages.
// ABOUTME: Each variant carries enough stage context to diagnose without re-running.

use std::time::Duration;

use crate::types::ParseVersionTagError;

/// Errors that abort a release run.
///
/// Every kind is fatal to the current run; retries exist only inside the
/// build and deploy watch loops, never at the stage level. Notification
/// failures are deliberately absent: they are logged and swallowed.
#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    /// The latest tag could not be advanced.
    #[error("invalid version format: {0}")]
    InvalidVersionFormat(#[from] ParseVersionTagError),

    /// Login against the forge was rejected or unreachable.
    #[error("authentication against {host} failed: {reason}")]
    AuthenticationFailure { host: String, reason: String },

    /// The most recent tag could not be fetched.
    #[error("failed to look up the latest tag: {reason}")]
    TagLookupFailure { reason: String },

    /// Tag creation was rejected; the release never started a build.
    #[error("failed to create tag {tag}: {reason}")]
    TagCreationFailure { tag: String, reason: String },

    /// The build reported success without an observed artifact push.
    #[error("build for {tag} reported success but no artifact push was observed")]
    ArtifactNotFound { tag: String },

    /// The build reported a terminal failure.
    #[error("build for {tag} failed: {reason}")]
    BuildFailure { tag: String, reason: String },

    /// The build watch deadline elapsed.
    #[error("build for {tag} did not finish within {}s", .waited.as_secs())]
    BuildTimeout { tag: String, waited: Duration },

    /// The scheduler rejected the new image reference.
    #[error("failed to update image for {app}: {reason}")]
    ImageUpdateFailure { app: String, reason: String },

    /// The deployment status never became visible, or the watch deadline
    /// elapsed without a terminal state.
    #[error("deployment of {app} timed out after {}s", .waited.as_secs())]
    DeployTimeout { app: String, waited: Duration },

    /// The scheduler reported a terminal failure state.
    #[error("deployment of {app} failed: {reason}")]
    DeployFailure { app: String, reason: String },
}
