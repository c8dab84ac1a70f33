// ABOUTME: Operator notification on release completion.
// ABOUTME: Platform-dispatched desktop notification, best-effort by contract.

use async_trait::async_trait;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("no notification mechanism on this platform")]
    Unsupported,

    #[error("notifier exited with status {0}")]
    CommandFailed(i32),

    #[error("failed to spawn notifier: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Delivery of human-readable messages to the operator.
///
/// Best-effort: callers log failures and move on; a lost notification never
/// fails a release.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}

/// Desktop notification via the platform's native command.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

#[async_trait]
impl Notifier for DesktopNotifier {
    async fn notify(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        let mut command = platform_command(title, body)?;
        let status = command
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;

        if status.success() {
            Ok(())
        } else {
            Err(NotifyError::CommandFailed(status.code().unwrap_or(-1)))
        }
    }
}

#[cfg(target_os = "macos")]
fn platform_command(title: &str, body: &str) -> Result<Command, NotifyError> {
    let script = format!(
        "display notification \"{}\" with title \"{}\"",
        escape_applescript(body),
        escape_applescript(title)
    );
    let mut command = Command::new("osascript");
    command.arg("-e").arg(script);
    Ok(command)
}

#[cfg(target_os = "linux")]
fn platform_command(title: &str, body: &str) -> Result<Command, NotifyError> {
    let mut command = Command::new("notify-send");
    command.arg(title).arg(body);
    Ok(command)
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn platform_command(_title: &str, _body: &str) -> Result<Command, NotifyError> {
    Err(NotifyError::Unsupported)
}

#[cfg(target_os = "macos")]
fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
