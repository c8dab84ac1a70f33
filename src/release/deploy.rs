// ABOUTME: Deployment-status polling state machine.
// ABOUTME: Waits for the status to become observable, then for a terminal state.

use std::time::Duration;

use crate::release::markers::DeployMarker;
use crate::release::policy::PollPolicy;
use crate::remote::StatusOps;
use crate::types::AppName;

/// Poll cadence while waiting for the status indicator to appear at all.
const VISIBILITY_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Terminal result of watching a deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// The app reached the running state; `origin` is its reachable address.
    Running { origin: String },
    /// The scheduler reported a terminal failure state.
    Failed { reason: String },
    /// The status never became observable, or no terminal state appeared
    /// before the deadline.
    TimedOut { waited: Duration },
}

/// Wait for a deployment to reach a terminal state.
///
/// Phase one waits up to `visibility_timeout` for the status to be readable
/// at all; right after an image submit the indicator may not exist yet.
/// Phase two polls the status until a terminal marker or the policy deadline.
/// Transient fetch errors in phase two are logged and retried.
pub async fn watch_deploy<S: StatusOps>(
    source: &S,
    app: &AppName,
    visibility_timeout: Duration,
    policy: &PollPolicy,
) -> DeployOutcome {
    let started = tokio::time::Instant::now();

    let mut status = loop {
        match source.fetch_status(app).await {
            Ok(status) => break status,
            Err(e) => {
                if started.elapsed() >= visibility_timeout {
                    tracing::warn!("deployment status never became visible: {e}");
                    return DeployOutcome::TimedOut {
                        waited: started.elapsed(),
                    };
                }
                tokio::time::sleep(VISIBILITY_POLL_INTERVAL).await;
            }
        }
    };

    loop {
        match DeployMarker::from_status(&status.state) {
            Some(DeployMarker::Running) => {
                return DeployOutcome::Running {
                    origin: status.origin,
                };
            }
            Some(DeployMarker::Failed) => {
                return DeployOutcome::Failed {
                    reason: status.state,
                };
            }
            None => {
                tracing::info!(state = %status.state, "deployment in progress");
            }
        }

        if policy.expired(started) {
            return DeployOutcome::TimedOut {
                waited: started.elapsed(),
            };
        }

        tokio::time::sleep(policy.interval).await;

        match source.fetch_status(app).await {
            Ok(next) => status = next,
            Err(e) => {
                tracing::warn!("failed to fetch deployment status: {e}");
            }
        }
    }
}
