// ABOUTME: Tests for the deployment-status polling state machine.
// ABOUTME: Drives watch_deploy with a scripted status source under paused time.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use slipway::release::{DeployOutcome, PollPolicy, watch_deploy};
use slipway::remote::{AppStatus, StatusError, StatusOps};
use slipway::types::AppName;

const ORIGIN: &str = "http://my-app.example.com:31001";

/// Scripted status source: serves each step once, then repeats the last step.
struct ScriptedStatus {
    steps: Vec<Step>,
    fetches: AtomicUsize,
}

#[derive(Clone, Copy)]
enum Step {
    NotVisible,
    Error,
    Status(&'static str),
}

impl ScriptedStatus {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            fetches: AtomicUsize::new(0),
        }
    }

    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusOps for ScriptedStatus {
    async fn fetch_status(&self, app: &AppName) -> Result<AppStatus, StatusError> {
        let call = self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.steps[call.min(self.steps.len() - 1)] {
            Step::NotVisible => Err(StatusError::NotVisible(app.to_string())),
            Step::Error => Err(StatusError::Transport("connection reset".to_string())),
            Step::Status(state) => Ok(AppStatus {
                state: state.to_string(),
                origin: ORIGIN.to_string(),
            }),
        }
    }
}

fn app() -> AppName {
    AppName::new("my-app").unwrap()
}

fn policy() -> PollPolicy {
    PollPolicy::new(Duration::from_secs(5)).with_max_wait(Duration::from_secs(600))
}

const VISIBILITY: Duration = Duration::from_secs(5);

#[tokio::test(start_paused = true)]
async fn running_immediately_resolves_with_origin() {
    let source = ScriptedStatus::new(vec![Step::Status("Running")]);

    let outcome = watch_deploy(&source, &app(), VISIBILITY, &policy()).await;

    assert_eq!(
        outcome,
        DeployOutcome::Running {
            origin: ORIGIN.to_string()
        }
    );
    assert_eq!(source.fetches(), 1);
}

#[tokio::test(start_paused = true)]
async fn waits_for_visibility_then_polls_to_running() {
    let source = ScriptedStatus::new(vec![
        Step::NotVisible,
        Step::NotVisible,
        Step::Status("Deploying"),
        Step::Status("Running"),
    ]);

    let outcome = watch_deploy(&source, &app(), VISIBILITY, &policy()).await;

    assert_eq!(
        outcome,
        DeployOutcome::Running {
            origin: ORIGIN.to_string()
        }
    );
    assert_eq!(source.fetches(), 4);
}

#[tokio::test(start_paused = true)]
async fn never_visible_times_out() {
    let source = ScriptedStatus::new(vec![Step::NotVisible]);

    let outcome = watch_deploy(&source, &app(), VISIBILITY, &policy()).await;

    match outcome {
        DeployOutcome::TimedOut { waited } => {
            assert!(waited >= VISIBILITY);
        }
        other => panic!("expected TimedOut, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn pending_statuses_keep_polling() {
    let source = ScriptedStatus::new(vec![
        Step::Status("Deploying"),
        Step::Status("Deploying"),
        Step::Status("Delayed"),
        Step::Status("Running"),
    ]);

    let outcome = watch_deploy(&source, &app(), VISIBILITY, &policy()).await;

    assert_eq!(
        outcome,
        DeployOutcome::Running {
            origin: ORIGIN.to_string()
        }
    );
    assert_eq!(source.fetches(), 4);
}

#[tokio::test(start_paused = true)]
async fn failed_status_resolves_to_failure() {
    let source = ScriptedStatus::new(vec![Step::Status("Deploying"), Step::Status("Failed")]);

    let outcome = watch_deploy(&source, &app(), VISIBILITY, &policy()).await;

    assert_eq!(
        outcome,
        DeployOutcome::Failed {
            reason: "Failed".to_string()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn error_status_variant_is_recognized() {
    let source = ScriptedStatus::new(vec![Step::Status("Error")]);

    let outcome = watch_deploy(&source, &app(), VISIBILITY, &policy()).await;

    assert_eq!(
        outcome,
        DeployOutcome::Failed {
            reason: "Error".to_string()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn polling_deadline_resolves_to_timed_out() {
    let source = ScriptedStatus::new(vec![Step::Status("Deploying")]);
    let policy = PollPolicy::new(Duration::from_secs(5)).with_max_wait(Duration::from_secs(60));

    let outcome = watch_deploy(&source, &app(), VISIBILITY, &policy).await;

    match outcome {
        DeployOutcome::TimedOut { waited } => {
            assert!(waited >= Duration::from_secs(60));
        }
        other => panic!("expected TimedOut, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn transient_errors_while_polling_are_retried() {
    let source = ScriptedStatus::new(vec![
        Step::Status("Deploying"),
        Step::Error,
        Step::Status("Running"),
    ]);

    let outcome = watch_deploy(&source, &app(), VISIBILITY, &policy()).await;

    assert_eq!(
        outcome,
        DeployOutcome::Running {
            origin: ORIGIN.to_string()
        }
    );
    assert_eq!(source.fetches(), 3);
}
