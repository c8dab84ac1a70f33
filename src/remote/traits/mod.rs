// ABOUTME: Capability traits for the two remote collaborators.
// ABOUTME: Defines TagOps, BuildLogOps, StatusOps, and ImageUpdateOps.

mod build_log;
mod image;
mod status;
mod tags;

pub use build_log::{BuildLogError, BuildLogOps};
pub use image::{ImageUpdateError, ImageUpdateOps};
pub use status::{AppStatus, StatusError, StatusOps};
pub use tags::{TagError, TagOps};
