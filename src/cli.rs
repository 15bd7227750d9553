use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{CommandFactory as _, Parser, Subcommand};
use clap_complete::{Shell, generate};

use crate::commands;
use crate::config::{default_config_path, load_profiles};
use crate::profile::Profile;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the AWS config file (defaults to ~/.aws/config)
    #[clap(short, long, global = true, env = "AWS_CONFIG_FILE")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Browse profiles interactively.
    #[default]
    Browse,
    /// Lists all configured profiles.
    List {
        /// Shows only the name of the profiles
        #[clap(short, long)]
        short: bool,
    },
    /// Shows a profile in TOML format.
    Show { profile: String },
    /// Prints the SSO login command for a profile.
    LoginCmd { profile: String },
    /// Generate shell completions for the given shell.
    Completions {
        #[clap(value_enum)]
        shell: Shell,
    },
}

impl Command {
    pub fn run(self, config: Option<PathBuf>) -> Result<()> {
        match self {
            Self::Browse => {
                commands::browse::browse(profiles(config)?)
                    .context("Failed to run the profile browser")?;
            },
            Self::List { short } => {
                commands::list::list(short, &profiles(config)?);
            },
            Self::Show { profile: name } => {
                commands::show::show(&profiles(config)?, &name)
                    .context("Failed to show profile")?;
            },
            Self::LoginCmd { profile: name } => {
                commands::login_cmd::login_cmd(&profiles(config)?, &name)
                    .context("Failed to print login command")?;
            },
            Self::Completions { shell } => {
                let mut cmd = Cli::command();
                generate(
                    shell,
                    &mut cmd,
                    env!("CARGO_PKG_NAME"),
                    &mut std::io::stdout(),
                );
            },
        }
        Ok(())
    }
}

fn profiles(config: Option<PathBuf>) -> Result<Vec<Profile>> {
    let path = match config {
        Some(path) => path,
        None => default_config_path()?,
    };
    load_profiles(&path)
}
