//! Roster CLI
//!
//! Command-line interface for the employee/department roster database

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod output;

use config::Settings;
use output::Output;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Roster - employees, departments and their phone numbers", long_about = None)]
struct Cli {
    /// SQLite database file (overrides configuration)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Configuration file (default: ./roster.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every SQL statement
    #[arg(long, global = true)]
    echo: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replace all rows with the sample departments and employees
    Seed,
    /// Print the phone roster
    Roster(commands::roster::RosterArgs),
    /// Count orange-favoring employees per department (raw SQL)
    Orange,
    /// Run an arbitrary SQL statement
    Sql(commands::raw::SqlArgs),
    /// Show one employee and their department
    Employee(commands::lookup::EmployeeArgs),
    /// List employees without a department
    Unassigned,
    /// List names of employees with a favorite color
    Color(commands::lookup::ColorArgs),
    /// List employees of a department by its name
    Department(commands::lookup::DepartmentArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load(cli.config.as_deref())?.with_overrides(cli.db, cli.echo);
    roster_core::logging_facility::init(settings.profile()?);

    let mut conn = roster_store::connect(&settings.store_options())?;
    let out = Output { json: cli.json };

    if settings.seed_on_connect && !matches!(cli.command, Commands::Seed) {
        roster_store::example_data(&mut conn)?;
    }

    match cli.command {
        Commands::Seed => commands::seed::execute(&mut conn),
        Commands::Roster(args) => commands::roster::execute(args, &conn, out),
        Commands::Orange => commands::raw::execute_orange(&conn, out),
        Commands::Sql(args) => commands::raw::execute_sql(args, &conn, out),
        Commands::Employee(args) => commands::lookup::execute_employee(args, &conn, out),
        Commands::Unassigned => commands::lookup::execute_unassigned(&conn, out),
        Commands::Color(args) => commands::lookup::execute_color(args, &conn, out),
        Commands::Department(args) => commands::lookup::execute_department(args, &conn, out),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
