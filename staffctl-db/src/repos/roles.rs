//! Role repository.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::{Role, RoleOverview};

pub struct RoleRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RoleRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List roles ordered by id. Choice source for the prompts.
    pub async fn list(&self) -> DbResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, Role>(
            "SELECT id, title, salary, department_id FROM role ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// List roles with their department name for display.
    pub async fn list_with_department(&self) -> DbResult<Vec<RoleOverview>> {
        let rows = sqlx::query_as::<_, RoleOverview>(
            r#"
            SELECT role.id, role.title, department.name AS department, role.salary
            FROM role
            LEFT JOIN department ON role.department_id = department.id
            ORDER BY role.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a role, returning the created row.
    pub async fn insert(
        &self,
        title: &str,
        salary: Decimal,
        department_id: i32,
    ) -> DbResult<Role> {
        let row = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO role (title, salary, department_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, salary, department_id
            "#,
        )
        .bind(title)
        .bind(salary)
        .bind(department_id)
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
    use crate::repos::DepartmentRepo;

    async fn test_pool() -> PgPool {
        let config = DbConfig::from_env().expect("config");
        assert!(config.url.is_some(), "DATABASE_URL required");
        create_pool_with_options(&config, 2)
            .await
            .expect("pool creation failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_role_joins_department_name() {
        let pool = test_pool().await;

        let dept = DepartmentRepo::new(&pool)
            .insert("Finance")
            .await
            .expect("department insert failed");

        let repo = RoleRepo::new(&pool);
        let created = repo
            .insert("Accountant", Decimal::from(60000), dept.id)
            .await
            .expect("role insert failed");
        assert_eq!(created.department_id, Some(dept.id));

        let overview = repo
            .list_with_department()
            .await
            .expect("list failed");
        let row = overview
            .iter()
            .find(|r| r.id == created.id)
            .expect("created role missing from list");
        assert_eq!(row.department.as_deref(), Some("Finance"));

        pool.close().await;
    }
}
