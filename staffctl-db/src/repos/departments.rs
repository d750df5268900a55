//! Department repository.

use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::Department;

pub struct DepartmentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> DepartmentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List departments ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Department>> {
        let rows = sqlx::query_as::<_, Department>("SELECT id, name FROM department ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a department, returning the created row.
    pub async fn insert(&self, name: &str) -> DbResult<Department> {
        let row = sqlx::query_as::<_, Department>(
            "INSERT INTO department (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;
    use crate::pool::create_pool_with_options;

    // Integration tests - run with DATABASE_URL set against a scratch
    // database: cargo test -p staffctl-db -- --ignored

    async fn test_pool() -> PgPool {
        let config = DbConfig::from_env().expect("config");
        assert!(config.url.is_some(), "DATABASE_URL required");
        create_pool_with_options(&config, 2)
            .await
            .expect("pool creation failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_list_includes_department() {
        let pool = test_pool().await;
        let repo = DepartmentRepo::new(&pool);

        let created = repo.insert("Engineering").await.expect("insert failed");
        assert!(created.id > 0);
        assert_eq!(created.name, "Engineering");

        let listed = repo.list().await.expect("list failed");
        assert!(listed.iter().any(|d| d.id == created.id));

        pool.close().await;
    }
}
