use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
pub struct ClassboardArgs {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the listen address from the config file.
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listen port from the config file.
    #[arg(long)]
    pub port: Option<u16>,
}
