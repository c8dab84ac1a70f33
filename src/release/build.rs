// ABOUTME: Build-log polling state machine.
// ABOUTME: Captures the pushed artifact once and resolves on a terminal marker.

use std::time::Duration;

use crate::release::log_window::{self, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET};
use crate::release::markers::BuildMarker;
use crate::release::policy::PollPolicy;
use crate::remote::BuildLogOps;
use crate::types::{ArtifactRef, VersionTag};

/// Terminal result of watching a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Build finished and the pushed artifact was captured.
    Succeeded(ArtifactRef),
    /// Build reported success but no artifact push was ever observed.
    MissingArtifact,
    /// Build reported failure.
    Failed { reason: String },
    /// The deadline elapsed before a terminal marker appeared.
    TimedOut { waited: Duration },
}

/// Poll the build log until a terminal marker appears in the tail window.
///
/// The artifact is captured from the head window at most once and cached for
/// the rest of the watch; the identifier is assumed stable once first
/// observed. Fetch errors are logged and retried on the next iteration; only
/// terminal markers and the deadline end the loop.
pub async fn watch_build<L: BuildLogOps>(
    logs: &L,
    target: &VersionTag,
    policy: &PollPolicy,
) -> BuildOutcome {
    let started = tokio::time::Instant::now();
    let mut artifact: Option<ArtifactRef> = None;

    loop {
        match logs.fetch_log().await {
            Ok(raw) => {
                let window = log_window::extract(&raw, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET);

                if artifact.is_none()
                    && let Some(found) = log_window::find_artifact(&window, target)
                {
                    tracing::info!(artifact = %found, "captured pushed image");
                    artifact = Some(found);
                }

                match BuildMarker::scan(window.tail()) {
                    Some(BuildMarker::Succeeded) => {
                        return match artifact {
                            Some(artifact) => BuildOutcome::Succeeded(artifact),
                            None => BuildOutcome::MissingArtifact,
                        };
                    }
                    Some(BuildMarker::Failed) => {
                        let reason = BuildMarker::failure_reason(window.tail())
                            .unwrap_or("build failed")
                            .to_string();
                        return BuildOutcome::Failed { reason };
                    }
                    None => {
                        tracing::debug!("build still running");
                    }
                }
            }
            Err(e) => {
                tracing::warn!("failed to fetch build log: {e}");
            }
        }

        if policy.expired(started) {
            return BuildOutcome::TimedOut {
                waited: started.elapsed(),
            };
        }

        tokio::time::sleep(policy.interval).await;
    }
}
