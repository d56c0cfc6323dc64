//! Flashing configuration, resolved once at startup
//!
//! Mirrors the ESP-IDF serial environment variables. Only the port has no
//! default; everything else falls back to the stock ESP32 settings.

use crate::error::{FlashError, Result};
use std::collections::HashMap;

pub const ENV_PORT: &str = "ESPPORT";
pub const ENV_BAUD: &str = "ESPBAUD";
pub const ENV_FLASH_MODE: &str = "ESPFLASHMODE";
pub const ENV_FLASH_FREQ: &str = "ESPFLASHFREQ";
pub const ENV_FLASH_SIZE: &str = "ESPFLASHSIZE";

const DEFAULT_BAUD: &str = "115200";
const DEFAULT_FLASH_MODE: &str = "dio";
const DEFAULT_FLASH_FREQ: &str = "40m";
const DEFAULT_FLASH_SIZE: &str = "4MB";

/// Serial and flash parameters for one esptool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashConfig {
    pub port: String,
    pub baud: String,
    pub flash_mode: String,
    pub flash_freq: String,
    pub flash_size: String,
}

impl FlashConfig {
    /// Resolve from the process environment.
    ///
    /// A port override wins over `ESPPORT` and is exported back into the
    /// environment for any downstream consumer that reads it there.
    pub fn from_env(port_override: Option<&str>) -> Result<Self> {
        if let Some(port) = port_override {
            std::env::set_var(ENV_PORT, port);
        }
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::resolve(&vars, port_override)
    }

    fn resolve(vars: &HashMap<String, String>, port_override: Option<&str>) -> Result<Self> {
        let get = |name: &str, default: &str| {
            vars.get(name)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        let port = match port_override {
            Some(port) => port.to_string(),
            None => get(ENV_PORT, ""),
        };
        if port.is_empty() {
            return Err(FlashError::PortNotSet);
        }

        Ok(Self {
            port,
            baud: get(ENV_BAUD, DEFAULT_BAUD),
            flash_mode: get(ENV_FLASH_MODE, DEFAULT_FLASH_MODE),
            flash_freq: get(ENV_FLASH_FREQ, DEFAULT_FLASH_FREQ),
            flash_size: get(ENV_FLASH_SIZE, DEFAULT_FLASH_SIZE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let config = FlashConfig::resolve(&vars(&[(ENV_PORT, "/dev/ttyUSB0")]), None).unwrap();
        assert_eq!(config.port, "/dev/ttyUSB0");
        assert_eq!(config.baud, "115200");
        assert_eq!(config.flash_mode, "dio");
        assert_eq!(config.flash_freq, "40m");
        assert_eq!(config.flash_size, "4MB");
    }

    #[test]
    fn test_env_values_used() {
        let env = vars(&[
            (ENV_PORT, "/dev/ttyUSB0"),
            (ENV_BAUD, "921600"),
            (ENV_FLASH_MODE, "qio"),
            (ENV_FLASH_FREQ, "80m"),
            (ENV_FLASH_SIZE, "8MB"),
        ]);
        let config = FlashConfig::resolve(&env, None).unwrap();
        assert_eq!(config.baud, "921600");
        assert_eq!(config.flash_mode, "qio");
        assert_eq!(config.flash_freq, "80m");
        assert_eq!(config.flash_size, "8MB");
    }

    #[test]
    fn test_port_override_wins() {
        let env = vars(&[(ENV_PORT, "/dev/ttyUSB0")]);
        let config = FlashConfig::resolve(&env, Some("/dev/ttyUSB1")).unwrap();
        assert_eq!(config.port, "/dev/ttyUSB1");
    }

    #[test]
    fn test_missing_port_fails() {
        assert!(matches!(
            FlashConfig::resolve(&vars(&[]), None),
            Err(FlashError::PortNotSet)
        ));
    }

    #[test]
    fn test_empty_port_fails() {
        assert!(matches!(
            FlashConfig::resolve(&vars(&[(ENV_PORT, "")]), None),
            Err(FlashError::PortNotSet)
        ));
    }
}
