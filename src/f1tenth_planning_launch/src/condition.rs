//! Condition evaluation for conditional launch actions

use crate::{
    error::{ArgumentError, LaunchError, Result},
    ir::Expr,
    substitution::{LaunchContext, Substitution},
};

/// Includes an action when the expression evaluates to true.
#[derive(Debug, Clone, PartialEq)]
pub struct IfCondition(pub Expr);

impl IfCondition {
    /// Condition on a single launch argument.
    pub fn argument(name: &str) -> Self {
        IfCondition(Expr(vec![Substitution::LaunchConfiguration(
            name.to_string(),
        )]))
    }

    /// Resolve the condition expression and coerce it to a boolean.
    pub fn evaluate(&self, context: &LaunchContext) -> Result<bool> {
        let IfCondition(expr) = self;
        let resolved = expr.resolve(context)?;
        let name = match expr.0.as_slice() {
            [Substitution::LaunchConfiguration(name)] => name.clone(),
            _ => expr.to_string(),
        };
        parse_bool(&name, &resolved).map_err(LaunchError::from)
    }
}

/// Coerce a launch argument value to a boolean.
///
/// Accepts `true`/`false`/`1`/`0`, case-insensitive and ignoring surrounding
/// whitespace. Anything else is rejected rather than silently treated as false.
pub fn parse_bool(name: &str, value: &str) -> std::result::Result<bool, ArgumentError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ArgumentError::InvalidBoolean {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("x", "true").unwrap());
        assert!(parse_bool("x", "True").unwrap());
        assert!(parse_bool("x", "TRUE").unwrap());
        assert!(parse_bool("x", "1").unwrap());
        assert!(parse_bool("x", "  true  ").unwrap());

        assert!(!parse_bool("x", "false").unwrap());
        assert!(!parse_bool("x", "False").unwrap());
        assert!(!parse_bool("x", "0").unwrap());

        assert!(parse_bool("x", "").is_err());
        assert!(parse_bool("x", "yes").is_err());
        assert!(parse_bool("x", "maybe").is_err());
    }

    #[test]
    fn test_evaluate_condition() {
        let mut context = LaunchContext::new();
        context.set_configuration("use_loader".to_string(), "true".to_string());
        context.set_configuration("debug".to_string(), "0".to_string());

        assert!(IfCondition::argument("use_loader").evaluate(&context).unwrap());
        assert!(!IfCondition::argument("debug").evaluate(&context).unwrap());
        assert!(IfCondition(Expr::literal("true")).evaluate(&context).unwrap());
    }

    #[test]
    fn test_evaluate_condition_errors() {
        let mut context = LaunchContext::new();
        context.set_configuration("flag".to_string(), "perhaps".to_string());

        let err = IfCondition::argument("flag").evaluate(&context).unwrap_err();
        assert!(matches!(
            err,
            LaunchError::Argument(ArgumentError::InvalidBoolean { ref name, .. }) if name == "flag"
        ));

        let err = IfCondition::argument("missing").evaluate(&context).unwrap_err();
        assert!(matches!(err, LaunchError::Substitution(_)));
    }
}
