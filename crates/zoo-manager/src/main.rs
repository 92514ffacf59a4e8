//! `zoo` - desktop and command-line front end for zoo-manager
//!
//! Without a subcommand this opens the record window. The subcommands act on
//! the same database from a terminal.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use zoo_manager::cli::{
    render_records, AddCommand, Cli, Command, ConfigCommand, DeleteCommand, ListCommand,
};
use zoo_manager::{init_logging, Config, Controller, RecordStore, Storage};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        None | Some(Command::Gui) => handle_gui(&config),
        Some(Command::List(cmd)) => handle_list(&config, &cmd),
        Some(Command::Add(cmd)) => handle_add(&config, &cmd),
        Some(Command::Delete(cmd)) => handle_delete(&config, &cmd),
        Some(Command::Status(cmd)) => handle_status(&config, cmd.json),
        Some(Command::Config(cmd)) => handle_config(&config, cmd),
    }
}

fn open_storage(config: &Config) -> anyhow::Result<Storage> {
    let path = config.database_path();
    Storage::open(&path).with_context(|| format!("opening database {}", path.display()))
}

#[cfg(feature = "gui")]
fn handle_gui(config: &Config) -> anyhow::Result<()> {
    let controller = Controller::new(open_storage(config)?)?;
    zoo_manager::gui::run(config, controller)?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn handle_gui(_config: &Config) -> anyhow::Result<()> {
    anyhow::bail!("this build of zoo has no window support; use a subcommand such as `zoo list`")
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let records = storage.list_all()?;
    println!("{}", render_records(&records, cmd.format)?);
    Ok(())
}

fn handle_add(config: &Config, cmd: &AddCommand) -> anyhow::Result<()> {
    let mut controller = Controller::new(open_storage(config)?)?;
    *controller.fields_mut() = cmd.to_fields();
    let id = controller.add()?;
    println!("Added {} with id {id}", cmd.name);
    Ok(())
}

fn handle_delete(config: &Config, cmd: &DeleteCommand) -> anyhow::Result<()> {
    let mut controller = Controller::new(open_storage(config)?)?;
    if controller.select_id(cmd.id) {
        let name = controller.fields().name.clone();
        controller.delete()?;
        println!("Deleted animal {} ({name})", cmd.id);
    } else {
        println!("No animal with id {}; nothing deleted", cmd.id);
    }
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> anyhow::Result<()> {
    let storage = open_storage(config)?;
    let count = storage.count()?;

    if json {
        let status = serde_json::json!({
            "database_path": storage.path(),
            "animals": count,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("zoo status");
        println!("----------");
        println!("Database:      {}", storage.path().display());
        println!("Animals:       {count}");
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
                println!();
                println!("[Window]");
                println!("  Width:              {}", config.gui.window_width);
                println!("  Height:             {}", config.gui.window_height);
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
