// ABOUTME: Release state marker types for the type state pattern.
// ABOUTME: Zero-sized types enforce the stage order at compile time.

/// Target version derived, nothing touched yet.
/// Available actions: `create_tag()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Planned;

/// Tag created on the forge; the CI build is underway.
/// Available actions: `watch_build()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Tagged;

/// Build succeeded and the pushed artifact is captured.
/// Available actions: `submit_image()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Built;

/// New image reference submitted to the scheduler.
/// Available actions: `await_running()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Submitted;

/// Deployment reached the running state.
/// Available actions: `origin()`, `finish()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Deployed;
