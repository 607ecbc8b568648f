//! PostgreSQL 基础设施
//! 连接池构建、迁移执行与就绪探测

use crate::{config::DatabaseConfig, error::AppError};
use secrecy::ExposeSecret;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// 按配置组装连接池参数
fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
}

/// 建立连接池并立刻校验连通性
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let pool = pool_options(config)
        .connect(config.url.expose_secret())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to PostgreSQL");
            AppError::Config(format!("database connection failed: {}", e))
        })?;

    tracing::info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Connected to PostgreSQL"
    );

    Ok(pool)
}

/// 建立惰性连接池：首次执行查询时才真正连接（测试用）
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    pool_options(config)
        .connect_lazy(config.url.expose_secret())
        .map_err(|e| AppError::Config(format!("invalid database url: {}", e)))
}

/// 应用 migrations/ 下的全部迁移
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
        tracing::error!(error = %e, "Migration failed");
        AppError::Internal(format!("migration failed: {}", e))
    })?;

    tracing::info!("Database migrations applied");
    Ok(())
}

/// 就绪探测：执行一次最小查询
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// 上报连接池占用指标
pub fn record_pool_metrics(pool: &PgPool) {
    metrics::gauge!("flix_db_pool_connections").set(pool.size() as f64);
    metrics::gauge!("flix_db_pool_idle").set(pool.num_idle() as f64);
}
