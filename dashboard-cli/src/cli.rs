use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use dashboard_core::{Config, Coordinates, HttpOrchestrator};
use inquire::{Confirm, CustomType, InquireError, Text};
use std::future::Future;
use tracing::debug;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "Current date, time and weather")]
pub struct Cli {
    /// Log debug output to stderr (ignored when RUST_LOG is set).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch once and print the dashboard.
    Show,

    /// Print the dashboard and refresh it on request.
    Interactive,

    /// Configure service endpoints and the location used for weather.
    Configure,

    /// Print the path of the configuration file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show => {
                let orch = HttpOrchestrator::from_config(&Config::load()?);
                initial_refresh(&orch).await;
                println!("{}", render::render(&orch.state(), Some(Local::now())));
            }
            Command::Interactive => {
                let orch = HttpOrchestrator::from_config(&Config::load()?);
                interactive(&orch).await?;
            }
            Command::Configure => configure()?,
            Command::ConfigPath => println!("{}", Config::config_file_path()?.display()),
        }

        Ok(())
    }
}

/// Wait for a refresh that has already raised `busy`, announcing it first.
async fn with_status(orch: &HttpOrchestrator, refresh: impl Future<Output = ()>) {
    eprintln!("[{}]", render::button_label(orch.state().busy));
    refresh.await;
}

async fn initial_refresh(orch: &HttpOrchestrator) {
    if let Some(refresh) = orch.begin_refresh_on_init() {
        with_status(orch, refresh).await;
    }
}

async fn interactive(orch: &HttpOrchestrator) -> anyhow::Result<()> {
    initial_refresh(orch).await;

    loop {
        println!("{}\n", render::render(&orch.state(), Some(Local::now())));

        let again = match Confirm::new("Refresh data?").with_default(true).prompt() {
            Ok(answer) => answer,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => false,
            Err(err) => return Err(err).context("Failed to read answer"),
        };

        if !again {
            debug!("leaving interactive mode");
            return Ok(());
        }

        with_status(orch, orch.begin_refresh()).await;
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    cfg.datetime.url = Text::new("Time service URL:")
        .with_default(&cfg.datetime.url)
        .prompt()
        .context("Failed to read time service URL")?;

    cfg.weather.url = Text::new("Weather service URL:")
        .with_default(&cfg.weather.url)
        .prompt()
        .context("Failed to read weather service URL")?;

    let latitude = CustomType::<f64>::new("Latitude:")
        .with_default(cfg.weather.latitude)
        .with_error_message("Please type a number between -90 and 90")
        .prompt()
        .context("Failed to read latitude")?;

    let longitude = CustomType::<f64>::new("Longitude:")
        .with_default(cfg.weather.longitude)
        .with_error_message("Please type a number between -180 and 180")
        .prompt()
        .context("Failed to read longitude")?;

    cfg.set_coordinates(Coordinates::new(latitude, longitude))?;
    cfg.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}
