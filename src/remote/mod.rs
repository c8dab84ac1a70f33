// ABOUTME: Remote collaborator boundary: capability traits and HTTP implementations.
// ABOUTME: The forge holds tags and build logs; the scheduler runs the app.

mod forge;
mod scheduler;
mod session;
mod traits;

pub use forge::HttpForge;
pub use scheduler::HttpScheduler;
pub use session::{Session, SessionError, SessionErrorKind};
pub use traits::{
    AppStatus, BuildLogError, BuildLogOps, ImageUpdateError, ImageUpdateOps, StatusError,
    StatusOps, TagError, TagOps,
};
