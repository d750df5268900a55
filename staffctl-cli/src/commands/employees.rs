//! Employee actions.

use std::fmt;

use anyhow::{Context, Result};
use inquire::{Select, Text};
use staffctl_db::{Employee, EmployeeRepo, PgPool, Role, RoleRepo};

use crate::table::Table;

/// Role choice rendered by title, carrying the id for the write.
struct RoleChoice(Role);

impl fmt::Display for RoleChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.title)
    }
}

/// Employee choice rendered by display name.
struct EmployeeChoice(Employee);

impl fmt::Display for EmployeeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.full_name())
    }
}

/// Manager choice with a leading "None" option mapping to a NULL manager_id.
enum ManagerChoice {
    None,
    Employee(Employee),
}

impl ManagerChoice {
    fn id(&self) -> Option<i32> {
        match self {
            ManagerChoice::None => None,
            ManagerChoice::Employee(emp) => Some(emp.id),
        }
    }
}

impl fmt::Display for ManagerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagerChoice::None => f.write_str("None"),
            ManagerChoice::Employee(emp) => f.write_str(&emp.full_name()),
        }
    }
}

pub async fn view_all(pool: &PgPool) -> Result<()> {
    let employees = EmployeeRepo::new(pool).list_overview().await?;
    let mut table = Table::new([
        "id",
        "first_name",
        "last_name",
        "job_title",
        "department",
        "salary",
        "manager",
    ]);
    for emp in &employees {
        table.row([
            emp.id.to_string(),
            emp.first_name.clone(),
            emp.last_name.clone(),
            emp.job_title.clone().unwrap_or_default(),
            emp.department.clone().unwrap_or_default(),
            emp.salary.map(|s| s.to_string()).unwrap_or_default(),
            emp.manager.clone().unwrap_or_default(),
        ]);
    }
    table.print();
    Ok(())
}

pub async fn add(pool: &PgPool) -> Result<()> {
    let roles = RoleRepo::new(pool).list().await?;
    if roles.is_empty() {
        println!("No roles available. Please add a role first.");
        return Ok(());
    }

    let first_name = Text::new("Enter the employee's first name:")
        .prompt()
        .context("Failed to get first name")?;
    let last_name = Text::new("Enter the employee's last name:")
        .prompt()
        .context("Failed to get last name")?;

    let role_choices: Vec<RoleChoice> = roles.into_iter().map(RoleChoice).collect();
    let role = Select::new("Select the employee's role:", role_choices)
        .prompt()
        .context("Failed to select role")?;

    let mut manager_choices = vec![ManagerChoice::None];
    manager_choices.extend(
        EmployeeRepo::new(pool)
            .list()
            .await?
            .into_iter()
            .map(ManagerChoice::Employee),
    );
    let manager = Select::new("Select the employee's manager:", manager_choices)
        .prompt()
        .context("Failed to select manager")?;

    let created = EmployeeRepo::new(pool)
        .insert(&first_name, &last_name, role.0.id, manager.id())
        .await?;
    println!("Employee added successfully:");
    let mut table = Table::new(["id", "first_name", "last_name", "role_id", "manager_id"]);
    table.row([
        created.id.to_string(),
        created.first_name.clone(),
        created.last_name.clone(),
        created.role_id.map(|id| id.to_string()).unwrap_or_default(),
        created
            .manager_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
    ]);
    table.print();
    Ok(())
}

pub async fn update_role(pool: &PgPool) -> Result<()> {
    let employees = EmployeeRepo::new(pool).list().await?;
    if employees.is_empty() {
        println!("No employees found.");
        return Ok(());
    }
    let roles = RoleRepo::new(pool).list().await?;
    if roles.is_empty() {
        println!("No roles available. Please add a role first.");
        return Ok(());
    }

    let employee_choices: Vec<EmployeeChoice> =
        employees.into_iter().map(EmployeeChoice).collect();
    let employee = Select::new(
        "Select the employee whose role you want to update:",
        employee_choices,
    )
    .prompt()
    .context("Failed to select employee")?;

    let role_choices: Vec<RoleChoice> = roles.into_iter().map(RoleChoice).collect();
    let role = Select::new("Select the new role:", role_choices)
        .prompt()
        .context("Failed to select role")?;

    let updated = EmployeeRepo::new(pool)
        .update_role(employee.0.id, role.0.id)
        .await?;
    if updated {
        println!("Employee role updated successfully.");
    } else {
        println!("No matching employee found.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> Employee {
        Employee {
            id: 9,
            first_name: "Grace".to_owned(),
            last_name: "Hopper".to_owned(),
            role_id: Some(2),
            manager_id: None,
        }
    }

    #[test]
    fn test_manager_none_maps_to_null() {
        assert_eq!(ManagerChoice::None.id(), None);
        assert_eq!(ManagerChoice::None.to_string(), "None");
    }

    #[test]
    fn test_manager_choice_displays_full_name() {
        let choice = ManagerChoice::Employee(sample_employee());
        assert_eq!(choice.to_string(), "Grace Hopper");
        assert_eq!(choice.id(), Some(9));
    }

    #[test]
    fn test_employee_choice_displays_full_name() {
        let choice = EmployeeChoice(sample_employee());
        assert_eq!(choice.to_string(), "Grace Hopper");
    }
}
