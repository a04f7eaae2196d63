//! Planning stack configuration
//!
//! Package names, parameter files, topic names and remapping tables consumed
//! by composition. The defaults describe the F1TENTH planning stack; any
//! subset can be overridden from a YAML file.

use crate::{actions::Remapping, error::ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LAUNCH_PACKAGE: &str = "f1tenth_launch";
pub const PLANNING_NAMESPACE: &str = "planning";
pub const TRAJECTORY_CSV: &str = "trajectory.csv";
pub const OUTPUT_TRAJECTORY_TOPIC: &str = "racing_planner/trajectory";

const TRAJ_TOPIC: &str = "/planning/racing_planner/trajectory";
const ODOM_TOPIC: &str = "/localization/kinematic_state";
const LIDAR_TOPIC: &str = "/sensing/lidar/scan";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Package whose share directory holds the parameter files.
    pub launch_package: String,
    /// Namespace of the group wrapping the trajectory loader.
    pub namespace: String,
    /// File name of the trajectory inside `map_path`.
    pub trajectory_csv: String,
    pub trajectory_loader: TrajectoryLoaderConfig,
    pub traj_selector: NodeConfig,
    pub env_perceiver: NodeConfig,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            launch_package: LAUNCH_PACKAGE.to_string(),
            namespace: PLANNING_NAMESPACE.to_string(),
            trajectory_csv: TRAJECTORY_CSV.to_string(),
            trajectory_loader: TrajectoryLoaderConfig::default(),
            traj_selector: NodeConfig {
                package: "traj_selector".to_string(),
                executable: "traj_selector".to_string(),
                name: "traj_selector".to_string(),
                param_file: "config/planning/traj_selector_params.param.yaml".to_string(),
                remappings: vec![
                    Remapping::new("/traj", TRAJ_TOPIC),
                    Remapping::new("/odom", ODOM_TOPIC),
                ],
            },
            // `/lidar` is listed twice in the deployed launch file. Kept as is.
            env_perceiver: NodeConfig {
                package: "env_perceiver".to_string(),
                executable: "env_perceiver".to_string(),
                name: "env_perceiver".to_string(),
                param_file: "config/planning/env_perceiver_params.param.yaml".to_string(),
                remappings: vec![
                    Remapping::new("/lidar", LIDAR_TOPIC),
                    Remapping::new("/odom", ODOM_TOPIC),
                    Remapping::new("/lidar", LIDAR_TOPIC),
                    Remapping::new("/traj", TRAJ_TOPIC),
                ],
            },
        }
    }
}

impl PlanningConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("Loaded planning config from {}", path.display());
        Self::from_yaml_str(&content)
    }
}

/// The included trajectory loader launch description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryLoaderConfig {
    pub package: String,
    /// Launch file relative to the loader package's share directory.
    pub launch_file: String,
    /// Parameter file relative to the launch package's share directory.
    pub param_file: String,
    pub output_trajectory_topic: String,
}

impl Default for TrajectoryLoaderConfig {
    fn default() -> Self {
        Self {
            package: "trajectory_loader".to_string(),
            launch_file: "launch/trajectory_loader.launch.py".to_string(),
            param_file: "config/planning/trajectory_loader.param.yaml".to_string(),
            output_trajectory_topic: OUTPUT_TRAJECTORY_TOPIC.to_string(),
        }
    }
}

/// A node started unconditionally. All fields are required when overridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub package: String,
    pub executable: String,
    pub name: String,
    /// Parameter file relative to the launch package's share directory.
    pub param_file: String,
    pub remappings: Vec<Remapping>,
}
