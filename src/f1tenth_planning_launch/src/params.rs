//! Parameter file references and loading

use crate::{
    error::ConfigError,
    ir::Expr,
    substitution::{LaunchContext, Substitution},
};
use serde::{Serialize, Serializer};
use serde_yaml::Value;
use std::{fmt, fs, path::Path};

/// A parameter file installed in a package's share directory.
///
/// Only the package and the share-relative path are stored, so the reference
/// resolves wherever the package happens to be installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterFile {
    pub package: String,
    pub path: String,
}

impl ParameterFile {
    pub fn new(package: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            path: path.into(),
        }
    }

    /// `$(find-pkg-share package)/path` as a lazy expression.
    pub fn to_expr(&self) -> Expr {
        Expr(vec![Substitution::PathJoin(vec![
            Expr(vec![Substitution::FindPackageShare(self.package.clone())]),
            Expr::literal(self.path.clone()),
        ])])
    }

    /// Resolve to a concrete path using the context's package index.
    pub fn resolve(
        &self,
        context: &LaunchContext,
    ) -> Result<String, crate::error::SubstitutionError> {
        self.to_expr().resolve(context)
    }
}

impl fmt::Display for ParameterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_expr())
    }
}

impl Serialize for ParameterFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Load parameters from a YAML file
pub fn load_param_file(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let mut params = Vec::new();

    // ROS 2 parameter files have the structure:
    // node_name:
    //   ros__parameters:
    //     param1: value1
    //     param2: value2

    if let Value::Mapping(root_map) = yaml {
        for (_node_name, node_value) in root_map.iter() {
            if let Value::Mapping(node_map) = node_value {
                if let Some(Value::Mapping(params_map)) = node_map.get("ros__parameters") {
                    flatten_params("", params_map, &mut params);
                }
            }
        }
    }

    Ok(params)
}

/// Recursively flatten nested parameter maps
fn flatten_params(prefix: &str, map: &serde_yaml::Mapping, output: &mut Vec<(String, String)>) {
    for (key, value) in map.iter() {
        let Value::String(key_str) = key else {
            continue;
        };
        let full_key = if prefix.is_empty() {
            key_str.clone()
        } else {
            format!("{}.{}", prefix, key_str)
        };

        match value {
            Value::Mapping(nested_map) => flatten_params(&full_key, nested_map, output),
            Value::String(s) => output.push((full_key, s.clone())),
            Value::Number(n) => output.push((full_key, n.to_string())),
            Value::Bool(b) => output.push((full_key, b.to_string())),
            Value::Null => output.push((full_key, "null".to_string())),
            Value::Sequence(seq) => {
                // Arrays get serialized as JSON
                let json_str = serde_json::to_string(seq).unwrap_or_else(|_| format!("{:?}", seq));
                output.push((full_key, json_str));
            }
            Value::Tagged(tagged) => output.push((full_key, format!("{:?}", tagged.value))),
        }
    }
}
