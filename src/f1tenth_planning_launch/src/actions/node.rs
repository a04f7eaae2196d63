//! Node action describing a process to spawn

use crate::params::ParameterFile;
use serde::{Deserialize, Serialize};

/// A topic remapping, `from` is the node-internal name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remapping {
    pub from: String,
    pub to: String,
}

impl Remapping {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Render as a `--ros-args -r` rule.
    pub fn to_rule(&self) -> String {
        format!("{}:={}", self.from, self.to)
    }
}

impl From<(&str, &str)> for Remapping {
    fn from((from, to): (&str, &str)) -> Self {
        Remapping::new(from, to)
    }
}

/// Node action: a ROS node process with parameter files and remappings.
///
/// Remappings keep declaration order, duplicates included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeAction {
    pub package: String,
    pub executable: String,
    pub name: String,
    pub param_files: Vec<ParameterFile>,
    pub remappings: Vec<Remapping>,
    pub active: bool,
}

impl NodeAction {
    /// Remapping pairs as `(from, to)` tuples.
    pub fn remap_pairs(&self) -> Vec<(&str, &str)> {
        self.remappings
            .iter()
            .map(|r| (r.from.as_str(), r.to.as_str()))
            .collect()
    }

    /// Effective target of `from`: the last remapping for a name wins.
    pub fn resolve_remap(&self, from: &str) -> Option<&str> {
        self.remappings
            .iter()
            .rev()
            .find(|r| r.from == from)
            .map(|r| r.to.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(remaps: &[(&str, &str)]) -> NodeAction {
        NodeAction {
            package: "env_perceiver".to_string(),
            executable: "env_perceiver".to_string(),
            name: "env_perceiver".to_string(),
            param_files: vec![],
            remappings: remaps.iter().map(|&r| Remapping::from(r)).collect(),
            active: true,
        }
    }

    #[test]
    fn test_remap_rule() {
        assert_eq!(
            Remapping::new("/lidar", "/sensing/lidar/scan").to_rule(),
            "/lidar:=/sensing/lidar/scan"
        );
    }

    #[test]
    fn test_duplicate_remaps_kept_in_order() {
        let node = node(&[
            ("/lidar", "/sensing/lidar/scan"),
            ("/odom", "/localization/kinematic_state"),
            ("/lidar", "/sensing/lidar/scan"),
        ]);
        assert_eq!(node.remappings.len(), 3);
        assert_eq!(node.remap_pairs()[2], ("/lidar", "/sensing/lidar/scan"));
    }

    #[test]
    fn test_last_remap_wins() {
        let node = node(&[("/lidar", "/a"), ("/lidar", "/b")]);
        assert_eq!(node.resolve_remap("/lidar"), Some("/b"));
        assert_eq!(node.resolve_remap("/odom"), None);
    }
}
