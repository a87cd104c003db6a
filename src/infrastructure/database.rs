//! 数据库基础设施

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Error,
};
use std::{str::FromStr, time::Duration};
use tracing::info;

use crate::config::DatabaseConfig;

const CREATE_PRODUCT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS product (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL UNIQUE,
    description TEXT    NOT NULL,
    price       REAL    NOT NULL,
    qty         INTEGER NOT NULL
)
"#;

#[derive(Clone)]
pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// 打开连接池并初始化表结构，数据库文件不存在时自动创建
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(8));

        // 内存库每个连接都是独立的数据库，只能保留单个常驻连接
        pool_options = if config.url.contains(":memory:") {
            pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;

        let manager = Self { pool };
        manager.init_schema().await?;

        Ok(manager)
    }

    async fn init_schema(&self) -> Result<(), Error> {
        info!("Ensuring product table exists");
        sqlx::query(CREATE_PRODUCT_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 连通性检查
    pub async fn ping(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// 关闭连接池，等待已借出的连接归还
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
