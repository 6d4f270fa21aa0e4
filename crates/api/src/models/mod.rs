pub mod completion;
pub mod diagnostic;
pub mod language;
pub mod metadata;
pub mod text;

pub use completion::*;
pub use diagnostic::*;
pub use language::*;
pub use metadata::*;
pub use text::*;
