//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod analyzer;
pub mod synthesis;

pub use analyzer::*;
pub use synthesis::*;
