//! Database layer for staffctl
//!
//! Connection configuration, a capped PgPool, and one repository per
//! entity (departments, roles, employees). All statements are
//! parameterized and every list query is ordered by id.

pub mod config;
pub mod error;
pub mod models;
pub mod pool;
pub mod repos;

pub use config::DbConfig;
pub use error::{DbError, DbResult};
pub use models::{Department, Employee, EmployeeOverview, Role, RoleOverview};
pub use pool::{create_pool, ping};
pub use repos::{DepartmentRepo, EmployeeRepo, RoleRepo};
pub use sqlx::PgPool;
