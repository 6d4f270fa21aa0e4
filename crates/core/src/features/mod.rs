//! Editor features computed from a document's [`Analysis`](crate::store::Analysis).

pub mod completion;
pub mod content;
pub mod diagnostics;
pub mod links;
pub mod paths;
pub mod resolve;

pub use completion::provide as completions;
pub use diagnostics::validate;
pub use links::document_links;
pub use paths::{FsPathCompleter, PathCompleter, PathEntry};
pub use resolve::resolve;
