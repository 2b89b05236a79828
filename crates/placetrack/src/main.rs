//! `placetrack` - CLI for placetrack
//!
//! Each invocation logs in through the landing page, performs one dashboard
//! action, and logs out.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use placetrack::cli::output::{render_records, render_stats};
use placetrack::cli::{AdminCommand, Cli, Command, ConfigCommand, StudentCommand};
use placetrack::{
    init_logging, AdminDashboard, Config, DepartmentFilter, PlacementDraft, RecordId, RecordStore,
    Role, Session, Storage, StudentDashboard,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Student(args) => {
            let store = open_store(&config)?;
            let mut session = Session::new();
            let user = session.enter(Role::Student, args.name.as_deref().unwrap_or(""))?;
            tracing::info!("Welcome back, {}!", user.name);
            handle_student(&config, &store, args.command)?;
            session.logout()?;
        }
        Command::Admin(args) => {
            let store = open_store(&config)?;
            let mut session = Session::new();
            let user = session.enter(Role::Admin, args.name.as_deref().unwrap_or(""))?;
            tracing::info!("Welcome back, {}!", user.name);
            handle_admin(&config, &store, args.command)?;
            session.logout()?;
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd)?,
    }
    Ok(())
}

fn open_store(config: &Config) -> anyhow::Result<RecordStore> {
    let path = config.database_path();
    let storage = Storage::open(&path)
        .with_context(|| format!("opening placement store at {}", path.display()))?;
    Ok(RecordStore::new(storage, config.storage.records_key.clone()))
}

fn handle_student(
    config: &Config,
    store: &RecordStore,
    cmd: StudentCommand,
) -> anyhow::Result<()> {
    let mut dashboard = StudentDashboard::open(store)?;
    match cmd {
        StudentCommand::List(list) => {
            dashboard.set_search(list.search);
            let department: DepartmentFilter = list.department.parse()?;
            dashboard.set_department(department);
            let visible: Vec<_> = dashboard.visible().collect();
            println!(
                "{}",
                render_records(&visible, list.format, &config.display)?
            );
        }
        StudentCommand::Departments => {
            for department in dashboard.departments() {
                println!("{department}");
            }
        }
        StudentCommand::Stats { json } => {
            println!(
                "{}",
                render_stats(&dashboard.stats(), json, &config.display)?
            );
        }
    }
    Ok(())
}

fn handle_admin(config: &Config, store: &RecordStore, cmd: AdminCommand) -> anyhow::Result<()> {
    let mut dashboard = AdminDashboard::open(store)?;
    match cmd {
        AdminCommand::List { format } => {
            let all: Vec<_> = dashboard.placements().iter().collect();
            println!("{}", render_records(&all, format, &config.display)?);
        }
        AdminCommand::Add(record) => {
            dashboard.open_new();
            if let Some(draft) = dashboard.draft_mut() {
                *draft = PlacementDraft::from(record);
            }
            let id = dashboard.submit()?;
            println!("Added placement {id}");
        }
        AdminCommand::Update { id, record } => {
            let id = RecordId(id);
            dashboard.begin_edit(id)?;
            if let Some(draft) = dashboard.draft_mut() {
                *draft = PlacementDraft::from(record);
            }
            dashboard.submit()?;
            println!("Updated placement {id}");
        }
        AdminCommand::Delete { id } => {
            let removed = dashboard.delete(RecordId(id))?;
            println!(
                "Deleted placement {} ({} at {})",
                removed.id, removed.student_name, removed.company_name
            );
        }
        AdminCommand::Stats { json } => {
            println!(
                "{}",
                render_stats(&dashboard.stats(), json, &config.display)?
            );
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
                println!("  Records key:        {}", config.storage.records_key);
                println!();
                println!("[Display]");
                println!("  Currency symbol:    {}", config.display.currency_symbol);
                println!("  Package unit:       {}", config.display.package_unit);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
