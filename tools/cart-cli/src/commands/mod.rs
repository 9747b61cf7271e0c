//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod run;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {}

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Session script to replay (`-` reads stdin).
    pub script: String,

    /// Print the cart after every operation.
    #[arg(long)]
    pub steps: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the current store configuration.
    Show,
    /// Write the demo store to cart.toml.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the store configuration.
    Validate,
}
