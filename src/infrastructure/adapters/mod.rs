//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod export;
pub mod storage;
pub mod tokenizer;

pub use export::*;
pub use storage::*;
pub use tokenizer::*;
