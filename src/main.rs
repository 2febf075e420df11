use anyhow::{Context, Result};
use clap::Parser;
use kresolve::{
    cli::{Cli, Commands},
    service::{RenderConfig, RenderService},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve {
            global,
            service,
            images,
            product,
            apparmor_annotation,
            output,
        } => {
            let rendered = RenderService::render(RenderConfig {
                global_path: global,
                service_path: service,
                images_path: images,
                product_path: product,
                apparmor_annotation,
            })?;

            match output {
                Some(path) => std::fs::write(&path, rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{}", rendered),
            }
        }
        Commands::Version => {
            println!("kresolve {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
