use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kresolve")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve layered configuration into deployment parameters
    Resolve {
        /// Path to the tenant-wide global layer (TOML).
        /// Falls back to <config dir>/kresolve/global.toml when present
        #[arg(long, value_name = "FILE")]
        global: Option<PathBuf>,

        /// Path to the service-level override layer (TOML)
        #[arg(long, value_name = "FILE")]
        service: Option<PathBuf>,

        /// Path to the per-image override layers (TOML, keyed by image
        /// identifier)
        #[arg(long, value_name = "FILE")]
        images: Option<PathBuf>,

        /// Path to the product descriptor document (JSON)
        #[arg(long, value_name = "FILE", env = "KRESOLVE_PRODUCT")]
        product: PathBuf,

        /// Render the AppArmor profile as a pod annotation for clusters
        /// without structured AppArmor support
        #[arg(long)]
        apparmor_annotation: bool,

        /// Write the resolved descriptor to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}
