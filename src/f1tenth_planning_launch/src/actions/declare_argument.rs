//! Declare argument action for argument metadata and resolution

use crate::error::ArgumentError;
use crate::substitution::LaunchContext;
use serde::Serialize;
use std::collections::HashMap;

/// Declare argument action with metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclareArgumentAction {
    pub name: String,
    pub default: Option<String>,
    pub description: Option<String>,
}

impl DeclareArgumentAction {
    /// Declare an argument that must be supplied by the caller.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            description: None,
        }
    }

    /// Declare an argument that falls back to `default`.
    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }

    /// Resolve this argument into the context.
    ///
    /// Caller-supplied values win over the default. A value already present in
    /// the context (e.g. forwarded by an including launch file) counts as
    /// supplied.
    pub fn apply(
        &self,
        context: &mut LaunchContext,
        cli_args: &HashMap<String, String>,
    ) -> Result<(), ArgumentError> {
        if let Some(value) = cli_args.get(&self.name) {
            context.set_configuration(self.name.clone(), value.clone());
            return Ok(());
        }

        if context.get_configuration(&self.name).is_some() {
            return Ok(());
        }

        match &self.default {
            Some(default) => {
                log::debug!("Using default for '{}': {}", self.name, default);
                context.set_configuration(self.name.clone(), default.clone());
                Ok(())
            }
            None => Err(ArgumentError::MissingArgument(self.name.clone())),
        }
    }
}

/// Parse a `name:=value` launch argument.
pub fn parse_launch_arg(s: &str) -> Result<(String, String), ArgumentError> {
    match s.split_once(":=") {
        Some((name, value)) if !name.is_empty() && !value.contains(":=") => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(ArgumentError::InvalidFormat(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_launch_arg() {
        assert_eq!(
            parse_launch_arg("map_path:=/maps/track1").unwrap(),
            ("map_path".to_string(), "/maps/track1".to_string())
        );
        assert_eq!(
            parse_launch_arg("use_trajectory_loader:=").unwrap(),
            ("use_trajectory_loader".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_launch_arg_invalid() {
        assert!(parse_launch_arg("map_path=/maps").is_err());
        assert!(parse_launch_arg(":=value").is_err());
        assert!(parse_launch_arg("a:=b:=c").is_err());
        assert!(parse_launch_arg("").is_err());
    }

    #[test]
    fn test_apply_cli_value_wins() {
        let arg = DeclareArgumentAction::with_default("use_trajectory_loader", "true");
        let mut context = LaunchContext::new();
        let mut cli = HashMap::new();
        cli.insert("use_trajectory_loader".to_string(), "false".to_string());

        arg.apply(&mut context, &cli).unwrap();
        assert_eq!(
            context.get_configuration("use_trajectory_loader"),
            Some("false".to_string())
        );
    }

    #[test]
    fn test_apply_default() {
        let arg = DeclareArgumentAction::with_default("use_trajectory_loader", "true");
        let mut context = LaunchContext::new();

        arg.apply(&mut context, &HashMap::new()).unwrap();
        assert_eq!(
            context.get_configuration("use_trajectory_loader"),
            Some("true".to_string())
        );
    }

    #[test]
    fn test_apply_keeps_existing_configuration() {
        let arg = DeclareArgumentAction::with_default("use_trajectory_loader", "true");
        let mut context = LaunchContext::new();
        context.set_configuration("use_trajectory_loader".to_string(), "false".to_string());

        arg.apply(&mut context, &HashMap::new()).unwrap();
        assert_eq!(
            context.get_configuration("use_trajectory_loader"),
            Some("false".to_string())
        );
    }

    #[test]
    fn test_apply_required_missing() {
        let arg = DeclareArgumentAction::required("map_path");
        let mut context = LaunchContext::new();

        let err = arg.apply(&mut context, &HashMap::new()).unwrap_err();
        assert!(matches!(err, ArgumentError::MissingArgument(ref name) if name == "map_path"));
        assert!(arg.is_required());
    }
}
