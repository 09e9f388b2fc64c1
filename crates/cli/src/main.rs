use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkbio_core::constants::{DEFAULT_PRESENCE_URL, env};
use linkbio_core::{ProfileConfig, ViewsConfig, env_parse_with_default};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "linkbio")]
#[command(about = "Link-in-bio page with Discord presence and a view counter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print the view count from the configured backend
    Views {
        /// Count a view before printing
        #[arg(short, long)]
        increment: bool,
    },
    /// Print the current Discord presence of the profile owner
    Presence,
}

/// Configuration resolved from the environment at startup.
pub(crate) struct Settings {
    pub profile: ProfileConfig,
    pub views: ViewsConfig,
    pub presence_url: String,
}

impl Settings {
    fn from_env() -> Result<Self> {
        let profile_path = std::env::var(env::PROFILE).ok().map(PathBuf::from);
        let profile = ProfileConfig::load(profile_path.as_deref())?;
        let views = ViewsConfig::from_env(&profile.discord_id);
        let presence_url =
            env_parse_with_default(env::PRESENCE_URL, DEFAULT_PRESENCE_URL.to_owned());
        Ok(Self { profile, views, presence_url })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(settings, port, host).await?,
        Commands::Views { increment } => commands::views::run(&settings, increment).await?,
        Commands::Presence => commands::presence::run(&settings).await?,
    }

    Ok(())
}
