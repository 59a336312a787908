//! Configuration for bridge connections
//!
//! Compiled-in defaults cover the bench setup; a YAML file can override
//! them. Callers that pass an explicit address through the C surface never
//! touch this beyond the verbose flag.

use serde::{Deserialize, Serialize};
use std::fs;

use crate::{BridgeError, Result};

/// Development-bench robot address, used when the caller passes no host.
pub const DEFAULT_ROBOT_HOST: &str = "172.17.0.2";
/// Default TCP port of the gripper's URCap server.
pub const DEFAULT_GRIPPER_PORT: u16 = 63352;
/// Default gripper connect timeout in milliseconds.
pub const DEFAULT_GRIPPER_TIMEOUT_MS: u32 = 2000;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub robot: RobotConfig,
    #[serde(default)]
    pub gripper: GripperConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RobotConfig {
    pub host: String,
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GripperConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub connect_timeout_ms: Option<u32>,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_ROBOT_HOST.to_string(),
            verbose: None,
        }
    }
}

impl BridgeConfig {
    pub fn load_from_path(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| BridgeError::Config(format!("Failed to read {}: {}", path, e)))?;

        let config: BridgeConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Verbose flag with default fallback
    pub fn verbose(&self) -> bool {
        self.robot.verbose.unwrap_or(false)
    }

    /// Gripper host, falling back to the robot host
    pub fn gripper_host(&self) -> &str {
        self.gripper.host.as_deref().unwrap_or(&self.robot.host)
    }

    /// Gripper port with default fallback
    pub fn gripper_port(&self) -> u16 {
        self.gripper.port.unwrap_or(DEFAULT_GRIPPER_PORT)
    }

    /// Gripper connect timeout with default fallback
    pub fn gripper_timeout_ms(&self) -> u32 {
        self.gripper.connect_timeout_ms.unwrap_or(DEFAULT_GRIPPER_TIMEOUT_MS)
    }
}

/// Connection parameters handed to the connector when opening a control or
/// receive interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    pub host: String,
    pub verbose: bool,
}

/// Connection parameters handed to the connector when opening a gripper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GripperOptions {
    pub host: String,
    pub port: u16,
    pub verbose: bool,
}
