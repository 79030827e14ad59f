//! Reminder trigger windows and the scheduled sweep over deadline extracts

mod loader;
mod sweep;
mod window;

pub use loader::{load_deadlines, load_deadlines_path, DEFAULT_DEADLINES_FILE};
pub use sweep::{sweep_due, DeadlineRecord};
pub use window::should_trigger;
