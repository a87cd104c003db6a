//! 核心层

pub mod error;
pub mod middleware;
