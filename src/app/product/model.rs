//! 商品数据模型

use serde::{Deserialize, Serialize};

/// 已持久化的商品，`id` 由存储层分配
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

/// 创建和更新请求体，四个字段都必须出现
///
/// 请求体中的 `id` 等多余字段会被忽略。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

impl ProductFields {
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            qty: self.qty,
        }
    }
}
