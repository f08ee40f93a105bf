use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use std::{path::PathBuf, sync::Arc};
use weather_core::{Config, provider_from_config, translate};

use crate::server;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "OpenWeather proxy with Portuguese conditions")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Address to listen on, e.g. "127.0.0.1:8080".
        #[arg(long)]
        listen: Option<String>,
    },

    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Print the Portuguese label for each condition text.
    Translate {
        #[arg(required = true)]
        text: Vec<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Serve { listen } => {
                let mut config = load_config(self.config.as_ref())?;
                config.apply_env_overrides();
                if let Some(addr) = listen {
                    config.server.listen_addr = addr;
                }

                let provider = provider_from_config(&config)?;
                server::serve(&config, Arc::from(provider)).await?;
            }
            Command::Configure => {
                let mut config = load_config(self.config.as_ref())?;

                let api_key = Password::new("OpenWeather API key:")
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()
                    .context("Failed to read API key")?;
                config.set_api_key(api_key.trim().to_string());

                let path = match self.config {
                    Some(path) => {
                        config.save_to(&path)?;
                        path
                    }
                    None => config.save()?,
                };
                println!("Saved configuration to {}", path.display());
            }
            Command::Translate { text } => {
                for t in text {
                    println!("{}", translate(&t));
                }
            }
        }

        Ok(())
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
