//! clinic-book - an address book for a clinic's doctors, patients and appointments.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clinic_book::app::App;
use clinic_book::cli::Cli;
use clinic_book::config::Config;
use clinic_book::error::ClinicError;
use clinic_book::logging::{self, LogTarget};
use clinic_book::storage::JsonStorage;
use tracing::{error, info};

const PROMPT: &str = "> ";

fn main() {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse_args();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ClinicError>() {
            Some(clinic) => error!("{}: {}", clinic.category(), clinic),
            None => error!("{e:#}"),
        }
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config_path();
    let config = Config::load_from_file(&config_path)?;

    let target = LogTarget::for_run(cli.log_stderr, cli.is_one_shot());
    logging::init(target, &config.logging.level);
    info!("Loaded config from: {}", config_path.display());

    let data_file = config.data_file(cli.data_file.as_deref());
    let storage = JsonStorage::new(&data_file);
    let mut app = App::load(Box::new(storage))
        .with_context(|| format!("Could not load address book from {}", data_file.display()))?;

    if cli.is_one_shot() {
        return run_commands(&mut app, &cli.commands);
    }
    run_prompt(&mut app)
}

/// Runs each `-c` command in order. Stops at the first failure.
fn run_commands(app: &mut App, commands: &[String]) -> anyhow::Result<()> {
    for input in commands {
        let result = app.execute(input)?;
        println!("{}", app.render(&result));
        if result.is_exit() {
            break;
        }
    }
    Ok(())
}

/// Reads commands from stdin until `exit` or end of input.
fn run_prompt(app: &mut App) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}");
        stdout.flush().context("Failed to write prompt")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match app.execute(&line) {
            Ok(result) => {
                println!("{}", app.render(&result));
                if result.is_exit() {
                    break;
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    info!("Exiting");
    Ok(())
}
