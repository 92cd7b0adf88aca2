use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CareArgs, ScanArgs};

/// Plant Whisperer: identify a plant from a photo and learn how to care for it
///
/// Photos are sent to a PlantNet-style identification service. The best match
/// is shown with its scientific name, a confidence score, care instructions
/// for its family and a daily plant affirmation.
#[derive(Parser)]
#[command(version, about, name = "pw")]
pub struct Args {
    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/whisperer/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// API key for the identification service
    #[arg(long, global = true, env = "PLANTNET_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the identification service
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Plant Whisperer CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Identify a plant from a photo or the camera
    #[command(alias = "s")]
    Scan(ScanArgs),
    /// Show care instructions for a plant family
    #[command(alias = "c")]
    Care(CareArgs),
    /// List families with dedicated care instructions
    Families,
}
