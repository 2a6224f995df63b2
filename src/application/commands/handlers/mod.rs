//! Command Handlers 实现

mod dictionary_handlers;
mod export_handlers;
mod extract_handlers;

pub use dictionary_handlers::*;
pub use export_handlers::*;
pub use extract_handlers::*;
