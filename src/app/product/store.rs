//! 商品存储
//!
//! 单表 `product` 的增删改查。字段与列的对应关系集中在 [`map_row`] 和各条 SQL 中，
//! 每个操作都是单条语句，执行即提交。

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use super::model::{Product, ProductFields};

const INSERT_PRODUCT: &str =
    "INSERT INTO product (name, description, price, qty) VALUES (?, ?, ?, ?)";
const SELECT_ALL: &str = "SELECT id, name, description, price, qty FROM product ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, description, price, qty FROM product WHERE id = ?";
const UPDATE_BY_ID: &str = "UPDATE product SET name = ?, description = ?, price = ?, qty = ? \
     WHERE id = ? RETURNING id, name, description, price, qty";
const DELETE_BY_ID: &str =
    "DELETE FROM product WHERE id = ? RETURNING id, name, description, price, qty";

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// `name` 唯一约束冲突
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Clone)]
pub struct ProductStore {
    pool: SqlitePool,
}

impl ProductStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 插入一条记录，返回分配的 id
    pub async fn insert(&self, fields: &ProductFields) -> Result<i64, StoreError> {
        let result = sqlx::query(INSERT_PRODUCT)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(fields.price)
            .bind(fields.qty)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &fields.name))?;

        Ok(result.last_insert_rowid())
    }

    /// 按插入顺序返回全部记录
    pub async fn select_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        let products = rows.iter().map(map_row).collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    pub async fn select_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(map_row).transpose()?)
    }

    /// 整体覆盖四个可变字段，记录不存在时返回 `None`
    pub async fn update_by_id(
        &self,
        id: i64,
        fields: &ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(UPDATE_BY_ID)
            .bind(&fields.name)
            .bind(&fields.description)
            .bind(fields.price)
            .bind(fields.qty)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, &fields.name))?;

        Ok(row.as_ref().map(map_row).transpose()?)
    }

    /// 删除记录并返回删除前的值，记录不存在时返回 `None`
    pub async fn delete_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(DELETE_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(map_row).transpose()?)
    }
}

fn map_row(row: &SqliteRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        qty: row.try_get("qty")?,
    })
}

fn map_write_error(err: sqlx::Error, name: &str) -> StoreError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            StoreError::Conflict(format!("Product with name '{}' already exists", name))
        }
        other => StoreError::Database(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::infrastructure::database::DatabaseManager;

    async fn memory_store() -> ProductStore {
        let db = DatabaseManager::connect(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        })
        .await
        .unwrap();
        ProductStore::new(db.get_pool().clone())
    }

    fn fields(name: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            description: format!("{} description", name),
            price: 4.5,
            qty: 10,
        }
    }

    #[tokio::test]
    async fn test_insert_and_select() {
        let store = memory_store().await;

        let first = store.insert(&fields("alpha")).await.unwrap();
        let second = store.insert(&fields("beta")).await.unwrap();
        assert!(second > first);

        let found = store.select_by_id(first).await.unwrap().unwrap();
        assert_eq!(found, fields("alpha").into_product(first));

        let all = store.select_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_select_missing_returns_none() {
        let store = memory_store().await;
        assert!(store.select_by_id(99).await.unwrap().is_none());
        assert!(store.select_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_name_is_conflict() {
        let store = memory_store().await;
        store.insert(&fields("alpha")).await.unwrap();

        let err = store.insert(&fields("alpha")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.select_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let store = memory_store().await;
        let id = store.insert(&fields("alpha")).await.unwrap();

        let replacement = ProductFields {
            name: "gamma".to_string(),
            description: "new".to_string(),
            price: 1.25,
            qty: 0,
        };
        let updated = store.update_by_id(id, &replacement).await.unwrap().unwrap();
        assert_eq!(updated, replacement.clone().into_product(id));
        assert_eq!(store.select_by_id(id).await.unwrap().unwrap(), updated);

        assert!(store.update_by_id(id + 1, &replacement).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_to_taken_name_is_conflict() {
        let store = memory_store().await;
        store.insert(&fields("alpha")).await.unwrap();
        let beta = store.insert(&fields("beta")).await.unwrap();

        let err = store.update_by_id(beta, &fields("alpha")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.select_by_id(beta).await.unwrap().unwrap().name, "beta");
    }

    #[tokio::test]
    async fn test_delete_returns_prior_values() {
        let store = memory_store().await;
        let id = store.insert(&fields("alpha")).await.unwrap();

        let deleted = store.delete_by_id(id).await.unwrap().unwrap();
        assert_eq!(deleted, fields("alpha").into_product(id));
        assert!(store.select_by_id(id).await.unwrap().is_none());
        assert!(store.delete_by_id(id).await.unwrap().is_none());
    }
}
