//! Fixed flash layout for the ESP32-Doom partition scheme
//!
//! The offsets mirror `build/partition_table/partition-table.bin` and must
//! be kept in sync with it by hand; nothing here parses the partition table
//! to check.

use crate::error::{FlashError, Result};
use std::path::Path;

/// One required build artifact and where it lands in flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactSpec {
    /// Path relative to the invocation directory
    pub path: &'static str,
    /// Human-readable label for error messages
    pub label: &'static str,
    /// Destination offset in flash
    pub offset: u32,
}

/// Every artifact a full flash needs, in validation order
pub static FLASH_LAYOUT: [ArtifactSpec; 5] = [
    ArtifactSpec {
        path: "build/bootloader/bootloader.bin",
        label: "Bootloader",
        offset: 0x1000,
    },
    ArtifactSpec {
        path: "build/partition_table/partition-table.bin",
        label: "Partition table",
        offset: 0x8000,
    },
    ArtifactSpec {
        path: "build/esp32-doom.bin",
        label: "Application",
        offset: 0x10000,
    },
    ArtifactSpec {
        path: "build/storage.bin",
        label: "SPIFFS storage",
        offset: 0x388000,
    },
    ArtifactSpec {
        path: "build/wad_partition.bin",
        label: "WAD file",
        offset: 0x188000,
    },
];

/// Artifacts sorted by destination offset, the order `write_flash` wants
pub fn flash_order() -> Vec<&'static ArtifactSpec> {
    let mut specs: Vec<_> = FLASH_LAYOUT.iter().collect();
    specs.sort_by_key(|spec| spec.offset);
    specs
}

/// Check that every artifact exists under `root`, stopping at the first
/// missing one.
pub fn validate_artifacts(root: &Path) -> Result<()> {
    for spec in &FLASH_LAYOUT {
        if !root.join(spec.path).exists() {
            return Err(FlashError::ArtifactMissing {
                label: spec.label.to_string(),
                path: spec.path.to_string(),
            });
        }
    }
    Ok(())
}
