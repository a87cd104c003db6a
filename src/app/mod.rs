//! 应用层

pub mod health;
pub mod product;

use axum::{middleware, routing::get, Router};
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{core::middleware::request_logging_middleware, infrastructure::database::DatabaseManager};
use product::ProductStore;

/// 处理器共享状态，启动时构造后注入路由
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseManager,
    pub products: ProductStore,
}

impl AppState {
    pub fn new(db: DatabaseManager) -> Self {
        let products = ProductStore::new(db.get_pool().clone());
        Self { db, products }
    }
}

/// 组装路由与中间件
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(product::routes())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
