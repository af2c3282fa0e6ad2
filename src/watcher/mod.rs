pub mod session;
pub mod submission_watcher;

pub use session::{SessionState, Tick};
pub use submission_watcher::{SubmissionWatcher, WatchState};
