//! Employee repository.
//!
//! The overview query joins role, department, and the employee table
//! itself so the manager column carries a display name instead of an id.

use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::{Employee, EmployeeOverview};

pub struct EmployeeRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> EmployeeRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List employees ordered by id. Choice source for the prompts.
    pub async fn list(&self) -> DbResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, role_id, manager_id FROM employee ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// List employees with job title, department, salary, and manager name.
    pub async fn list_overview(&self) -> DbResult<Vec<EmployeeOverview>> {
        let rows = sqlx::query_as::<_, EmployeeOverview>(
            r#"
            SELECT
                e.id,
                e.first_name,
                e.last_name,
                role.title AS job_title,
                department.name AS department,
                role.salary,
                m.first_name || ' ' || m.last_name AS manager
            FROM employee e
            LEFT JOIN role ON e.role_id = role.id
            LEFT JOIN department ON role.department_id = department.id
            LEFT JOIN employee m ON e.manager_id = m.id
            ORDER BY e.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert an employee, returning the created row.
    ///
    /// `manager_id` is NULL when no manager was chosen.
    pub async fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        role_id: i32,
        manager_id: Option<i32>,
    ) -> DbResult<Employee> {
        let row = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employee (first_name, last_name, role_id, manager_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, role_id, manager_id
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(role_id)
        .bind(manager_id)
        .fetch_one(self.pool)
        .await?;
        Ok(row)
    }

    /// Update an employee's role column only.
    ///
    /// Returns false when the id matched no row.
    pub async fn update_role(&self, employee_id: i32, role_id: i32) -> DbResult<bool> {
        let result = sqlx::query("UPDATE employee SET role_id = $1 WHERE id = $2")
            .bind(role_id)
            .bind(employee_id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
