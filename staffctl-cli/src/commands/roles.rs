//! Role actions.

use std::fmt;

use anyhow::{Context, Result};
use inquire::{CustomType, Select, Text};
use rust_decimal::Decimal;
use staffctl_db::{Department, DepartmentRepo, PgPool, RoleRepo};

use crate::table::Table;

/// Department choice rendered by name, carrying the id for the insert.
struct DepartmentChoice(Department);

impl fmt::Display for DepartmentChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

pub async fn view_all(pool: &PgPool) -> Result<()> {
    let roles = RoleRepo::new(pool).list_with_department().await?;
    let mut table = Table::new(["id", "title", "department", "salary"]);
    for role in &roles {
        table.row([
            role.id.to_string(),
            role.title.clone(),
            role.department.clone().unwrap_or_default(),
            role.salary.to_string(),
        ]);
    }
    table.print();
    Ok(())
}

pub async fn add(pool: &PgPool) -> Result<()> {
    let departments = DepartmentRepo::new(pool).list().await?;
    if departments.is_empty() {
        println!("No departments available. Please add a department first.");
        return Ok(());
    }

    let title = Text::new("Enter the title for the new role:")
        .prompt()
        .context("Failed to get role title")?;

    // Re-prompts until the input parses; no insert runs on bad input.
    let salary = CustomType::<Decimal>::new("Enter the salary for the new role:")
        .with_error_message("Please enter a valid number")
        .prompt()
        .context("Failed to get role salary")?;

    let choices: Vec<DepartmentChoice> = departments.into_iter().map(DepartmentChoice).collect();
    let department = Select::new("Select the department for the new role:", choices)
        .prompt()
        .context("Failed to select department")?;

    let created = RoleRepo::new(pool)
        .insert(&title, salary, department.0.id)
        .await?;
    println!("Role added successfully:");
    let mut table = Table::new(["id", "title", "salary", "department_id"]);
    table.row([
        created.id.to_string(),
        created.title.clone(),
        created.salary.to_string(),
        created
            .department_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
    ]);
    table.print();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_choice_displays_name() {
        let choice = DepartmentChoice(Department {
            id: 3,
            name: "Engineering".to_owned(),
        });
        assert_eq!(choice.to_string(), "Engineering");
    }
}
