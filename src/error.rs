//! Error types for the flash orchestrator

use std::process::ExitStatus;
use thiserror::Error;

/// Errors that terminate a flashing run
///
/// Every variant is terminal: no retry or recovery is attempted anywhere.
#[derive(Debug, Error)]
pub enum FlashError {
    /// Required device port is unset
    #[error(
        "ESPPORT environment variable not set!\n\
         Please set ESPPORT to your device port (e.g. /dev/ttyUSB0)\n\
         You can also set it via: export ESPPORT=/dev/ttyUSB0, or pass --port"
    )]
    PortNotSet,

    /// An expected build output file is absent
    #[error("{label} file not found: {path}\nPlease run 'idf.py build' first")]
    ArtifactMissing { label: String, path: String },

    /// Failed to spawn the external flashing tool
    #[error("Failed to run {tool}: {source}")]
    SpawnFailed {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The external flashing tool exited non-zero
    #[error("{tool} exited with {status}\nstdout: {stdout}\nstderr: {stderr}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },
}

/// Result type for flashing operations
pub type Result<T> = std::result::Result<T, FlashError>;
