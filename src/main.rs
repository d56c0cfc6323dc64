//! espdoom-flash - flash the ESP32-Doom build onto a device
//!
//! Thin orchestration over esptool.py: resolves the serial configuration
//! from the environment, checks that every build artifact exists, then
//! issues a single `write_flash` covering bootloader, partition table,
//! application, WAD partition and SPIFFS storage.
//!
//! Every failure is terminal; there are no retries and no dry-run mode.

mod cli;
mod config;
mod error;
mod esptool;
mod layout;

use clap::Parser;
use cli::Cli;
use config::FlashConfig;
use error::Result;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    println!("ESP32-Doom Flash Script");
    println!("=======================");

    match flash_all(&cli) {
        Ok(()) => {
            println!();
            println!("✓ All partitions flashed successfully!");
            println!("The ESP32 should now boot with:");
            println!("- Application firmware");
            println!("- WAD file in the wad partition");
            println!("- index.html in the SPIFFS storage partition");
        }
        Err(e) => {
            eprintln!();
            eprintln!("✗ Flashing failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Drive one flashing run end to end.
fn flash_all(cli: &Cli) -> Result<()> {
    let config = FlashConfig::from_env(cli.port.as_deref())?;
    layout::validate_artifacts(Path::new("."))?;
    esptool::run_flash(&config)?;
    log::info!("Flashing all partitions completed successfully");
    Ok(())
}
