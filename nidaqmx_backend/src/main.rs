//! `daqmx`: command-line access to the NI-DAQmx driver.
//!
//! ```bash
//! daqmx devices
//! daqmx error -200279
//! daqmx run scan.toml --samples 1000
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `info`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nidaqmx_backend::{sys, Daqmx, DriverConfig, TaskConfig};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "daqmx")]
#[command(about = "Inspect NI-DAQmx devices and run tasks described in TOML", long_about = None)]
struct Cli {
    /// Driver configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path of the NI-DAQmx runtime library, overriding the configuration
    #[arg(long, global = true)]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured devices
    Devices,

    /// Explain a DAQmx status code
    Error {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },

    /// Reset a device to its power-on state
    Reset { device: String },

    /// Report driver functions the loaded runtime does not export
    Functions,

    /// Build a task from a TOML file, run it and summarize what it read
    Run {
        task: PathBuf,

        /// Samples per channel to read from input tasks
        #[arg(long)]
        samples: Option<usize>,
    },
}

fn driver_config(cli: &Cli) -> Result<DriverConfig> {
    let mut config = match &cli.config {
        Some(path) => DriverConfig::from_file(path).with_context(|| format!("reading {}", path.display()))?,
        None => DriverConfig::default(),
    };
    if let Some(library) = &cli.library {
        config.library_path = Some(library.clone());
    }
    Ok(config)
}

fn load_driver(cli: &Cli) -> Result<Daqmx> {
    Daqmx::load(driver_config(cli)?).context("loading the NI-DAQmx runtime")
}

fn list_devices(daqmx: &Daqmx) -> Result<()> {
    let devices = daqmx.devices()?;
    if devices.is_empty() {
        println!("No devices configured");
        return Ok(());
    }
    println!(
        "{:<16} {:<18} {:>10} {:>5} {:>4} {:>4} {:>4} {:>4}  simulated",
        "name", "product", "serial", "ai", "ao", "di", "do", "ctr"
    );
    for (name, device) in &devices {
        println!(
            "{:<16} {:<18} {:>10X} {:>5} {:>4} {:>4} {:>4} {:>4}  {}",
            name,
            device.product_type,
            device.serial_number,
            device.ai_physical_chans.len(),
            device.ao_physical_chans.len(),
            device.di_lines.len(),
            device.do_lines.len(),
            device.ci_physical_chans.len() + device.co_physical_chans.len(),
            device.is_simulated,
        );
    }
    Ok(())
}

fn explain_error(cli: &Cli, code: i32) -> Result<()> {
    let name = sys::code_name(code).unwrap_or("unnamed");
    match load_driver(cli) {
        Ok(daqmx) => {
            let text = daqmx.error_string(code).unwrap_or_default();
            println!("{code} ({name}): {text}");
        }
        Err(err) => {
            warn!("Driver unavailable, showing the code name only: {err:#}");
            println!("{code} ({name})");
        }
    }
    Ok(())
}

fn run_task(daqmx: &Daqmx, path: &Path, samples: Option<usize>) -> Result<()> {
    let config = TaskConfig::from_file(path).with_context(|| format!("reading {}", path.display()))?;
    let summary = config
        .run(daqmx, samples)
        .with_context(|| format!("running task '{}'", config.name))?;
    if summary.channels.is_empty() {
        return Ok(());
    }

    println!("{:<24} {:>12} {:>12} {:>12}", "channel", "min", "mean", "max");
    for channel in &summary.channels {
        println!(
            "{:<24} {:>12.6} {:>12.6} {:>12.6}",
            channel.name, channel.min, channel.mean, channel.max
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Devices => list_devices(&load_driver(&cli)?)?,
        Commands::Error { code } => explain_error(&cli, *code)?,
        Commands::Reset { device } => load_driver(&cli)?.reset_device(device)?,
        Commands::Functions => {
            let daqmx = load_driver(&cli)?;
            let missing = daqmx.fns().missing();
            println!(
                "{} of {} functions resolved",
                sys::FUNCTION_NAMES.len() - missing.len(),
                sys::FUNCTION_NAMES.len()
            );
            for name in missing {
                println!("  missing: {name}");
            }
        }
        Commands::Run { task, samples } => run_task(&load_driver(&cli)?, task, *samples)?,
    }
    Ok(())
}
