//! ledbar — scroll CPU load across a small I2C LED display.
//!
//! Run with:  `RUST_LOG=info ledbar /dev/cu.usbmodem101 0x70 --display matrix`

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use ledbar_config::{parse_address, LedConfig};
use ledbar_core::DisplayKind;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scrolling CPU bar graph for I2C LED displays")
        .arg(Arg::new("device")
            .help("Serial device of the I2C host adapter")
            .required(false))
        .arg(Arg::new("address")
            .help("I2C address of the display, e.g. 0x70")
            .value_parser(parse_address)
            .required(false))
        .arg(Arg::new("display")
            .short('d')
            .long("display")
            .help("Display type")
            .value_parser(clap::value_parser!(DisplayKind))
            .required(false))
        .arg(Arg::new("config")
            .short('c')
            .long("config")
            .help("Configuration file (default: $XDG_CONFIG_HOME/ledbar/ledbar.toml)")
            .value_parser(clap::value_parser!(PathBuf))
            .required(false))
        .arg(Arg::new("brightness")
            .short('b')
            .long("brightness")
            .help("Display brightness on the driver's scale")
            .value_parser(clap::value_parser!(u8))
            .required(false))
        .arg(Arg::new("interval")
            .short('i')
            .long("interval-ms")
            .help("Milliseconds between frames")
            .value_parser(clap::value_parser!(u64))
            .required(false))
}

/// Command-line values win over the file.
fn apply_overrides(config: &mut LedConfig, matches: &ArgMatches) {
    if let Some(kind) = matches.get_one::<DisplayKind>("display") {
        config.display.kind = *kind;
    }
    if let Some(device) = matches.get_one::<String>("device") {
        config.display.device = Some(device.clone());
    }
    if let Some(address) = matches.get_one::<u8>("address") {
        config.display.address = Some(*address);
    }
    if let Some(brightness) = matches.get_one::<u8>("brightness") {
        config.display.brightness = Some(*brightness);
    }
    if let Some(interval) = matches.get_one::<u64>("interval") {
        config.timing.interval_ms = Some(*interval);
    }
}

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = cli().get_matches();
    tracing::info!("ledbar v{} starting", env!("CARGO_PKG_VERSION"));

    let path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(ledbar_config::default_path);
    let mut config = ledbar_config::load(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    apply_overrides(&mut config, &matches);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building runtime")?;

    runtime
        .block_on(ledbar_scheduler::run(config))
        .map_err(Into::into)
}
