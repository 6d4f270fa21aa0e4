pub mod extract;
pub mod literal;
pub mod query;

pub use extract::{FRAMEWORK_MODULE, extract, find_import_clause};
pub use literal::{LiteralValue, evaluate};
