//! Phone roster command
//!
//! Usage: roster roster [--strategy nav|eager|join]

use crate::output::Output;
use clap::{Args, ValueEnum};
use roster_store::queries::{
    all_employees_join, all_employees_nav, all_employees_nav_eager, RosterEntry,
};
use roster_store::repo::EmployeeRelations;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Load employees, then look up each department (N+1)
    Nav,
    /// Load employees and departments together
    Eager,
    /// Project name, department and phone in one join
    Join,
}

#[derive(Debug, Args)]
pub struct RosterArgs {
    #[arg(long, value_enum, default_value_t = Strategy::Join)]
    pub strategy: Strategy,
}

pub fn execute(
    args: RosterArgs,
    conn: &Connection,
    out: Output,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<RosterEntry> = match args.strategy {
        Strategy::Nav => {
            let mut entries = Vec::new();
            for emp in all_employees_nav(conn)? {
                let dept = emp.department(conn)?;
                entries.push(RosterEntry {
                    name: emp.name,
                    dept: dept.as_ref().and_then(|d| d.dept.clone()),
                    phone: dept.and_then(|d| d.phone),
                });
            }
            entries
        }
        Strategy::Eager => all_employees_nav_eager(conn)?
            .into_iter()
            .map(RosterEntry::from)
            .collect(),
        Strategy::Join => all_employees_join(conn)?,
    };

    out.list(&entries, |e| {
        format!(
            "{}\t{}\t{}",
            e.name,
            e.dept.as_deref().unwrap_or("-"),
            e.phone.as_deref().unwrap_or("-")
        )
    })
}
