use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use weekplan::cli::args::{Cli, Commands};
use weekplan::cli::commands;
use weekplan::config::{Config, Paths};
use weekplan::error::PlannerError;
use weekplan::storage::open_store;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        let code = e.downcast_ref::<PlannerError>().map_or(1, PlannerError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();

    let level = config.general.log_level.raised_by(cli.verbose).filter();
    // A logger can only fail to install if one is already set.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Add(args) => {
            let store = open_store(&config, &paths).context("Failed to open task storage")?;
            commands::add(store.as_ref(), args, &config, format)?
        },
        Commands::List { week, day } => {
            let store = open_store(&config, &paths).context("Failed to open task storage")?;
            commands::list(store.as_ref(), week, day.as_deref(), format)?
        },
        Commands::Status { id, status } => {
            let store = open_store(&config, &paths).context("Failed to open task storage")?;
            commands::status(store.as_ref(), &id, status, format)?
        },
        Commands::Edit { id, time, task } => {
            let store = open_store(&config, &paths).context("Failed to open task storage")?;
            commands::edit(store.as_ref(), &id, time.as_deref(), task.as_deref(), format)?
        },
        Commands::Delete { id } => {
            let store = open_store(&config, &paths).context("Failed to open task storage")?;
            commands::delete(store.as_ref(), &id, format)?
        },
        Commands::Config(command) => commands::config(command, &config, &paths, format)?,
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}
