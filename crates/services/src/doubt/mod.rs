mod session;
mod workflow;

// Public API of the doubt-resolution subsystem.
pub use crate::error::DoubtError;
pub use session::{DoubtSession, PendingDoubt};
pub use workflow::DoubtService;
