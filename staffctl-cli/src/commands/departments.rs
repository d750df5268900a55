//! Department actions.

use anyhow::{Context, Result};
use inquire::Text;
use staffctl_db::{Department, DepartmentRepo, PgPool};

use crate::table::Table;

pub async fn view_all(pool: &PgPool) -> Result<()> {
    let departments = DepartmentRepo::new(pool).list().await?;
    print_departments(&departments);
    Ok(())
}

pub async fn add(pool: &PgPool) -> Result<()> {
    let name = Text::new("Enter the name of the new department:")
        .prompt()
        .context("Failed to get department name")?;

    let created = DepartmentRepo::new(pool).insert(&name).await?;
    println!("Department added successfully:");
    print_departments(&[created]);
    Ok(())
}

fn print_departments(departments: &[Department]) {
    let mut table = Table::new(["id", "name"]);
    for dept in departments {
        table.row([dept.id.to_string(), dept.name.clone()]);
    }
    table.print();
}
