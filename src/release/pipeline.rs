// ABOUTME: Release value threading the target tag and captured artifact through stages.
// ABOUTME: Constructor and shared accessors; transitions live in transitions.rs.

use std::marker::PhantomData;

use crate::release::error::ReleaseError;
use crate::release::state::Planned;
use crate::types::{ArtifactRef, VersionTag};

/// A single release run, parameterized by its pipeline stage.
///
/// The target tag is derived once at planning time and held immutably; the
/// artifact is filled in when the build watch captures it, the origin when
/// the deployment reaches running.
#[derive(Debug)]
pub struct Release<S> {
    pub(super) previous: VersionTag,
    pub(super) target: VersionTag,
    pub(super) artifact: Option<ArtifactRef>,
    pub(super) origin: Option<String>,
    pub(super) _state: PhantomData<S>,
}

impl Release<Planned> {
    /// Plan a release from the most recent existing tag.
    pub fn plan(latest: VersionTag) -> Result<Self, ReleaseError> {
        let target = latest.advance()?;
        Ok(Self {
            previous: latest,
            target,
            artifact: None,
            origin: None,
            _state: PhantomData,
        })
    }
}

impl<S> Release<S> {
    /// The version tag this release is creating.
    pub fn target(&self) -> &VersionTag {
        &self.target
    }

    /// The tag the release was derived from.
    pub fn previous(&self) -> &VersionTag {
        &self.previous
    }
}
