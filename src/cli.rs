// CLI module for handling command-line interface

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dlpage")]
#[command(about = "Resolve download page links from the installer catalog and mirror list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default site.toml
    Init,
    /// Populate the download links for a language
    Links {
        language: String,
        #[arg(long)]
        json: bool,
    },
    /// Replay instructions panel selections
    Instructions {
        #[arg(required = true)]
        versions: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Classify a page path and preview the scroll snap
    Route {
        path: String,
        #[arg(long, default_value_t = 0.0)]
        offset: f64,
        #[arg(long, default_value_t = 0.0)]
        height: f64,
    },
    /// Check the catalog against the page configuration
    Doctor {
        #[arg(long)]
        json: bool,
    },
}
