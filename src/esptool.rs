//! esptool command construction and invocation
//!
//! One blocking `write_flash` call covering every partition. Output is
//! captured so a failing run can be reported verbatim.

use crate::config::FlashConfig;
use crate::error::{FlashError, Result};
use crate::layout;
use std::process::Command;

const ESPTOOL: &str = "esptool.py";
const CHIP: &str = "esp32";

/// Argument list for a full `write_flash` of the ESP32-Doom layout
pub fn build_args(config: &FlashConfig) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "--chip".into(),
        CHIP.into(),
        "--port".into(),
        config.port.clone(),
        "--baud".into(),
        config.baud.clone(),
        "write_flash".into(),
        "--flash_mode".into(),
        config.flash_mode.clone(),
        "--flash_freq".into(),
        config.flash_freq.clone(),
        "--flash_size".into(),
        config.flash_size.clone(),
    ];
    for spec in layout::flash_order() {
        args.push(format!("{:#x}", spec.offset));
        args.push(spec.path.to_string());
    }
    args
}

/// Flash all partitions, waiting for esptool to exit.
pub fn run_flash(config: &FlashConfig) -> Result<()> {
    let args = build_args(config);
    log::info!("Flashing all partitions...");
    log::info!("Command: {} {}", ESPTOOL, args.join(" "));

    run_tool(ESPTOOL, &args)
}

/// Spawn `tool`, capture its output and block until it exits.
///
/// `Command::output` reaps the child on every path, so no handle leaks
/// even when the run fails.
fn run_tool(tool: &str, args: &[String]) -> Result<()> {
    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|source| FlashError::SpawnFailed {
            tool: tool.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(FlashError::ToolFailed {
            tool: tool.to_string(),
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    log::debug!(
        "{} output:\n{}",
        tool,
        String::from_utf8_lossy(&output.stdout)
    );
    Ok(())
}
