//! Include action for nested launch descriptions

use crate::ir::Expr;
use crate::substitution::Substitution;
use serde::Serialize;

/// An argument forwarded to an included launch description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncludeArg {
    pub name: String,
    pub value: Expr,
}

/// Inclusion of a launch file installed in a package's share directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncludeAction {
    pub package: String,
    /// Launch file path relative to the package share directory.
    pub file: String,
    pub args: Vec<IncludeArg>,
}

impl IncludeAction {
    /// Path expression of the included launch file.
    pub fn file_expr(&self) -> Expr {
        Expr(vec![Substitution::PathJoin(vec![
            Expr(vec![Substitution::FindPackageShare(self.package.clone())]),
            Expr::literal(self.file.clone()),
        ])])
    }

    /// Look up a forwarded argument by name.
    pub fn arg(&self, name: &str) -> Option<&Expr> {
        self.args.iter().find(|a| a.name == name).map(|a| &a.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_expr() {
        let include = IncludeAction {
            package: "trajectory_loader".to_string(),
            file: "launch/trajectory_loader.launch.py".to_string(),
            args: vec![],
        };
        assert_eq!(
            include.file_expr().to_string(),
            "$(find-pkg-share trajectory_loader)/launch/trajectory_loader.launch.py"
        );
    }

    #[test]
    fn test_arg_lookup() {
        let include = IncludeAction {
            package: "trajectory_loader".to_string(),
            file: "launch/trajectory_loader.launch.py".to_string(),
            args: vec![IncludeArg {
                name: "csv_path".to_string(),
                value: Expr::literal("/maps/track1/trajectory.csv"),
            }],
        };
        assert_eq!(
            include.arg("csv_path").and_then(Expr::as_literal),
            Some("/maps/track1/trajectory.csv")
        );
        assert!(include.arg("missing").is_none());
    }
}
