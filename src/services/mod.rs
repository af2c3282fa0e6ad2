pub mod explainer;
pub mod extractor;
pub mod notifier;
pub mod parse;
pub mod storage;

pub use explainer::Explainer;
pub use notifier::Notifier;
pub use storage::Storage;
