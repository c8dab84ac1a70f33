// ABOUTME: Release pipeline orchestration using the type state pattern.
// ABOUTME: Exports state markers, pollers, markers, and the Release struct.

mod build;
mod deploy;
mod error;
pub mod log_window;
mod markers;
mod pipeline;
mod policy;
mod state;
mod transitions;

pub use build::{BuildOutcome, watch_build};
pub use deploy::{DeployOutcome, watch_deploy};
pub use error::ReleaseError;
pub use log_window::LogWindow;
pub use markers::{BuildMarker, DeployMarker};
pub use pipeline::Release;
pub use policy::PollPolicy;
pub use state::{Built, Deployed, Planned, Submitted, Tagged};
