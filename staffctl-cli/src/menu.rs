//! Interactive menu loop.
//!
//! One action runs to completion before the next prompt. A failed action
//! is logged and the loop continues; only a failed initial connection is
//! fatal, and that is handled before the loop starts.

use std::fmt;

use anyhow::Result;
use inquire::{InquireError, Select};
use staffctl_db::PgPool;
use tracing::{error, warn};

use crate::commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl Action {
    const ALL: [Action; 8] = [
        Action::ViewDepartments,
        Action::ViewRoles,
        Action::ViewEmployees,
        Action::AddDepartment,
        Action::AddRole,
        Action::AddEmployee,
        Action::UpdateEmployeeRole,
        Action::Exit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::ViewDepartments => "View all departments",
            Action::ViewRoles => "View all roles",
            Action::ViewEmployees => "View all employees",
            Action::AddDepartment => "Add a department",
            Action::AddRole => "Add a role",
            Action::AddEmployee => "Add an employee",
            Action::UpdateEmployeeRole => "Update an employee role",
            Action::Exit => "Exit",
        };
        f.write_str(label)
    }
}

/// Run the menu loop until the user exits.
pub async fn run(pool: &PgPool) -> Result<()> {
    loop {
        let action =
            match Select::new("What would you like to do?", Action::ALL.to_vec()).prompt() {
                Ok(action) => action,
                // Esc or Ctrl-C on the menu itself means leave.
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    Action::Exit
                }
                Err(err) => return Err(err.into()),
            };

        if action == Action::Exit {
            println!("Goodbye!");
            return Ok(());
        }

        if let Err(err) = dispatch(action, pool).await {
            match err.downcast_ref::<InquireError>() {
                Some(InquireError::OperationCanceled) => {
                    warn!("cancelled, returning to menu");
                }
                Some(InquireError::OperationInterrupted) => {
                    println!("Goodbye!");
                    return Ok(());
                }
                _ => error!(error = ?err, action = %action, "action failed"),
            }
        }
    }
}

async fn dispatch(action: Action, pool: &PgPool) -> Result<()> {
    match action {
        Action::ViewDepartments => commands::departments::view_all(pool).await,
        Action::ViewRoles => commands::roles::view_all(pool).await,
        Action::ViewEmployees => commands::employees::view_all(pool).await,
        Action::AddDepartment => commands::departments::add(pool).await,
        Action::AddRole => commands::roles::add(pool).await,
        Action::AddEmployee => commands::employees::add(pool).await,
        Action::UpdateEmployeeRole => commands::employees::update_role(pool).await,
        Action::Exit => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_seven_actions_plus_exit() {
        assert_eq!(Action::ALL.len(), 8);
        assert_eq!(Action::ALL.last(), Some(&Action::Exit));
    }

    #[test]
    fn test_menu_labels() {
        let labels: Vec<String> = Action::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "View all departments",
                "View all roles",
                "View all employees",
                "Add a department",
                "Add a role",
                "Add an employee",
                "Update an employee role",
                "Exit",
            ]
        );
    }
}
