//! Substitution types

use crate::error::SubstitutionError;
use crate::ir::Expr;
use crate::substitution::{context::LaunchContext, path::path_join};
use std::fmt;

/// Substitution enum representing different types of substitutions
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    /// Plain text (no substitution)
    Text(String),
    /// $(var name) - Launch configuration variable
    LaunchConfiguration(String),
    /// $(find-pkg-share package_name) - Installed share directory of a package
    FindPackageShare(String),
    /// Path segments joined with the platform-neutral rule
    PathJoin(Vec<Expr>),
}

impl Substitution {
    /// Resolve substitution to string value
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        match self {
            Substitution::Text(s) => Ok(s.clone()),
            Substitution::LaunchConfiguration(name) => context
                .get_configuration(name)
                .ok_or_else(|| SubstitutionError::UndefinedVariable(name.clone())),
            Substitution::FindPackageShare(package_name) => context
                .package_index()
                .find_share(package_name)
                .map(|p| p.display().to_string())
                .ok_or_else(|| SubstitutionError::PackageNotFound(package_name.clone())),
            Substitution::PathJoin(segments) => {
                let resolved = segments
                    .iter()
                    .map(|segment| segment.resolve(context))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(path_join(&resolved))
            }
        }
    }
}

impl fmt::Display for Substitution {
    /// Render in launch-file syntax, e.g. `$(find-pkg-share pkg)/config/a.yaml`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Substitution::Text(s) => write!(f, "{}", s),
            Substitution::LaunchConfiguration(name) => write!(f, "$(var {})", name),
            Substitution::FindPackageShare(package) => write!(f, "$(find-pkg-share {})", package),
            Substitution::PathJoin(segments) => {
                let rendered: Vec<String> = segments.iter().map(Expr::to_string).collect();
                write!(f, "{}", path_join(&rendered))
            }
        }
    }
}

/// Resolve list of substitutions to single string
pub fn resolve_substitutions(
    subs: &[Substitution],
    context: &LaunchContext,
) -> Result<String, SubstitutionError> {
    let mut result = String::new();
    for sub in subs {
        result.push_str(&sub.resolve(context)?);
    }
    Ok(result)
}
