//! Command-line driver for the target assembly.
//!
//! Build the geometry from a TOML parameter file:
//! ```sh
//! target-cli build demos/water_18o.toml
//! target-cli check demos/water_18o.toml
//! target-cli materials
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "target-cli")]
#[command(about = "Cyclotron target assembly geometry")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Construct the geometry and print the parameters and volume tree.
    Build {
        /// Parameter file; defaults are used when omitted.
        config: Option<PathBuf>,
    },
    /// Check that a parameter file yields a valid geometry.
    Check {
        /// Parameter file; defaults are used when omitted.
        config: Option<PathBuf>,
    },
    /// List the standard material table.
    Materials,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { config } => {
            let job = config::load_or_default(config.as_deref())?;
            let builder = runner::build(&job)?;
            builder.print_parameters();
            if let Some(world) = builder.world() {
                println!("{}", target_geometry::VolumeReport(world));
            }
            Ok(())
        }
        Commands::Check { config } => {
            let job = config::load_or_default(config.as_deref())?;
            runner::build(&job)?;
            match config {
                Some(path) => println!("Geometry is valid: {}", path.display()),
                None => println!("Default geometry is valid"),
            }
            Ok(())
        }
        Commands::Materials => runner::list_materials(),
    }
}
