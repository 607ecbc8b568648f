//! Movie repository (数据库访问层)

use crate::{error::AppError, models::movie::Movie};
use sqlx::PgPool;

pub struct MovieRepository {
    db: PgPool,
}

impl MovieRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出所有电影
    pub async fn list(&self) -> Result<Vec<Movie>, AppError> {
        let movies = sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY title")
            .fetch_all(&self.db)
            .await?;

        Ok(movies)
    }
}
