mod cli;
mod commands;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Init => {
            commands::init::init()?;
            0
        }
        Commands::Links { language, json } => commands::links::links(&language, json).await?,
        Commands::Instructions { versions, json } => {
            commands::instructions::instructions(&versions, json)?;
            0
        }
        Commands::Route {
            path,
            offset,
            height,
        } => {
            commands::route::route(&path, offset, height).await?;
            0
        }
        Commands::Doctor { json } => commands::doctor::check_health(json).await?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
