//! Row models for the three entities and their joined list views.

use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: i32,
    pub title: String,
    pub salary: Decimal,
    pub department_id: Option<i32>,
}

/// Role joined with its department name for list display.
#[derive(Debug, Clone, FromRow)]
pub struct RoleOverview {
    pub id: i32,
    pub title: String,
    pub department: Option<String>,
    pub salary: Decimal,
}

#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role_id: Option<i32>,
    pub manager_id: Option<i32>,
}

impl Employee {
    /// Display name used for manager columns and selection lists.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Employee joined with role, department, and manager for list display.
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeOverview {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<Decimal>,
    pub manager: Option<String>,
}
