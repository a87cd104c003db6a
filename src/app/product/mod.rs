//! 商品模块

pub mod handler;
pub mod model;
pub mod store;

use axum::{routing::get, Router};

use super::AppState;
use handler::{create_product, delete_product, get_product, list_products, update_product};

pub use model::{Product, ProductFields};
pub use store::{ProductStore, StoreError};

/// 商品路由：集合路径 GET/POST，单条路径 GET 查询、PUT 更新、DELETE 删除
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/product", get(list_products).post(create_product))
        .route(
            "/product/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}
