//! # 商品 CRUD 服务
//!
//! 基于 Axum + SQLx(SQLite) 的单表商品服务，分层如下：
//! - `app`：商品模型、存储与处理器
//! - `core`：统一错误处理、中间件
//! - `infrastructure`：数据库连接、日志
//! - `config`：服务配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::AppState;
pub use config::{Config, ConfigError};
pub use crate::core::error::CoreError;
