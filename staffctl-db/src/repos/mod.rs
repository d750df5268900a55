//! Repositories, one per entity.
//!
//! # Design Principles
//!
//! - Shared connection pool, no per-call connections
//! - List operations use JOINs for display names - no N+1 queries
//! - Inserts use RETURNING so callers get the created row back

pub mod departments;
pub mod employees;
pub mod roles;

pub use departments::DepartmentRepo;
pub use employees::EmployeeRepo;
pub use roles::RoleRepo;
