use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Chassis service scaffold
#[derive(Debug, Parser)]
#[command(name = "chassis", about = "Starting point for new backend services")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "chassis.toml", env = "CHASSIS_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "CHASSIS_LISTEN")]
    pub listen: Option<SocketAddr>,
}
