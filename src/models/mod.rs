pub mod message;
pub mod submission;

pub use message::{ExtensionMessage, PopupPayload};
pub use submission::{Example, SubmissionRecord};
