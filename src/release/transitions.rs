// ABOUTME: State transition methods for the release pipeline.
// ABOUTME: Each method consumes self and returns the next state on success.

use std::marker::PhantomData;
use std::time::Duration;

use crate::release::build::{self, BuildOutcome};
use crate::release::deploy::{self, DeployOutcome};
use crate::release::error::ReleaseError;
use crate::release::pipeline::Release;
use crate::release::policy::PollPolicy;
use crate::release::state::{Built, Deployed, Planned, Submitted, Tagged};
use crate::remote::{BuildLogOps, ImageUpdateOps, StatusOps, TagOps};
use crate::types::{AppName, ArtifactRef, VersionTag};

impl<S> Release<S> {
    /// Internal helper to transition to a new state.
    fn transition<T>(self) -> Release<T> {
        Release {
            previous: self.previous,
            target: self.target,
            artifact: self.artifact,
            origin: self.origin,
            _state: PhantomData,
        }
    }
}

// =============================================================================
// Planned -> Tagged
// =============================================================================

impl Release<Planned> {
    /// Create the target tag on the forge, triggering the CI build.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseError::TagCreationFailure`; a release whose tag was
    /// rejected has touched nothing else.
    #[must_use = "release state must be used"]
    pub async fn create_tag<F: TagOps>(self, forge: &F) -> Result<Release<Tagged>, ReleaseError> {
        forge
            .create_tag(&self.target)
            .await
            .map_err(|e| ReleaseError::TagCreationFailure {
                tag: self.target.to_string(),
                reason: e.to_string(),
            })?;

        tracing::info!(tag = %self.target, "tag created");
        Ok(self.transition())
    }
}

// =============================================================================
// Tagged -> Built
// =============================================================================

impl Release<Tagged> {
    /// Watch the build log until the image for the target tag is pushed and
    /// the build reports a terminal state.
    ///
    /// # Errors
    ///
    /// Maps the watch outcome onto `BuildFailure`, `ArtifactNotFound`, or
    /// `BuildTimeout`.
    #[must_use = "release state must be used"]
    pub async fn watch_build<L: BuildLogOps>(
        mut self,
        logs: &L,
        policy: &PollPolicy,
    ) -> Result<Release<Built>, ReleaseError> {
        match build::watch_build(logs, &self.target, policy).await {
            BuildOutcome::Succeeded(artifact) => {
                self.artifact = Some(artifact);
                Ok(self.transition())
            }
            BuildOutcome::MissingArtifact => Err(ReleaseError::ArtifactNotFound {
                tag: self.target.to_string(),
            }),
            BuildOutcome::Failed { reason } => Err(ReleaseError::BuildFailure {
                tag: self.target.to_string(),
                reason,
            }),
            BuildOutcome::TimedOut { waited } => Err(ReleaseError::BuildTimeout {
                tag: self.target.to_string(),
                waited,
            }),
        }
    }
}

// =============================================================================
// Built -> Submitted
// =============================================================================

impl Release<Built> {
    /// The artifact captured from the build log.
    pub fn artifact(&self) -> &ArtifactRef {
        self.artifact
            .as_ref()
            .expect("built release must have an artifact")
    }

    /// Submit the captured image reference to the scheduler.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseError::ImageUpdateFailure`.
    #[must_use = "release state must be used"]
    pub async fn submit_image<U: ImageUpdateOps>(
        self,
        scheduler: &U,
        app: &AppName,
    ) -> Result<Release<Submitted>, ReleaseError> {
        scheduler
            .update_image(app, self.artifact())
            .await
            .map_err(|e| ReleaseError::ImageUpdateFailure {
                app: app.to_string(),
                reason: e.to_string(),
            })?;

        Ok(self.transition())
    }
}

// =============================================================================
// Submitted -> Deployed
// =============================================================================

impl Release<Submitted> {
    /// Wait for the deployment to reach the running state.
    ///
    /// # Errors
    ///
    /// Maps the watch outcome onto `DeployFailure` or `DeployTimeout`.
    #[must_use = "release state must be used"]
    pub async fn await_running<R: StatusOps>(
        mut self,
        scheduler: &R,
        app: &AppName,
        visibility_timeout: Duration,
        policy: &PollPolicy,
    ) -> Result<Release<Deployed>, ReleaseError> {
        match deploy::watch_deploy(scheduler, app, visibility_timeout, policy).await {
            DeployOutcome::Running { origin } => {
                self.origin = Some(origin);
                Ok(self.transition())
            }
            DeployOutcome::Failed { reason } => Err(ReleaseError::DeployFailure {
                app: app.to_string(),
                reason,
            }),
            DeployOutcome::TimedOut { waited } => Err(ReleaseError::DeployTimeout {
                app: app.to_string(),
                waited,
            }),
        }
    }
}

// =============================================================================
// Deployed - Terminal State
// =============================================================================

impl Release<Deployed> {
    /// The artifact this release shipped.
    pub fn artifact(&self) -> &ArtifactRef {
        self.artifact
            .as_ref()
            .expect("deployed release must have an artifact")
    }

    /// The externally reachable address of the deployed instance.
    pub fn origin(&self) -> &str {
        self.origin
            .as_deref()
            .expect("deployed release must have an origin")
    }

    /// Consume the release, returning the shipped tag and origin.
    pub fn finish(self) -> (VersionTag, String) {
        let origin = self
            .origin
            .expect("deployed release must have an origin");
        (self.target, origin)
    }
}
