pub mod ast;
pub mod auto_import;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod parser;
pub mod session;
pub mod store;
pub mod util;

pub use config::Settings;
pub use error::{Result, StencilError};
pub use session::Session;
