mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "login-form")]
#[command(version, about = "Login form - validate login input and print the result", long_about = None)]
struct Cli {
    /// Options file (TOML). Missing file means all defaults
    #[arg(short, long, global = true, default_value = "login-form.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective configuration and the controls it displays
    Config,

    /// Submit the form
    Submit {
        #[command(flatten)]
        contact: ContactArgs,

        /// Password as typed. Prefer setting LOGIN_FORM_PASSWORD so the password
        /// stays out of the process list and shell history
        #[arg(short, long, env = "LOGIN_FORM_PASSWORD", hide_env_values = true, default_value = "")]
        password: String,

        /// Tick the remember-me box
        #[arg(short, long)]
        remember_me: bool,
    },

    /// Request a password reset for the entered contact
    Forgot {
        #[command(flatten)]
        contact: ContactArgs,
    },
}

#[derive(Args)]
pub struct ContactArgs {
    /// Email address as typed
    #[arg(short, long, default_value = "")]
    pub email: String,

    /// Phone number as typed
    #[arg(long, default_value = "")]
    pub phone: String,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(&cli.config)?;

    let accepted = match cli.command {
        Commands::Config => {
            commands::config::execute(&config)?;
            true
        }
        Commands::Submit {
            contact,
            password,
            remember_me,
        } => commands::submit::execute(config, &contact, password, remember_me)?,
        Commands::Forgot { contact } => commands::forgot::execute(config, &contact)?,
    };

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
