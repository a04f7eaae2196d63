//! Error types for f1tenth_planning_launch

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Launch argument error: {0}")]
    Argument(#[from] ArgumentError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),

    #[error("Record generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("Invalid launch argument format: '{0}' (expected name:=value)")]
    InvalidFormat(String),

    #[error("Required launch argument '{0}' was not provided. Pass it as {0}:=<value>")]
    MissingArgument(String),

    #[error(
        "Launch argument '{name}' has value '{value}', expected a boolean (true, false, 1 or 0)"
    )]
    InvalidBoolean { name: String, value: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum SubstitutionError {
    #[error("Undefined variable: '{0}'. Did you forget to declare it as a launch argument?")]
    UndefinedVariable(String),

    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Substitution error: {0}")]
    Substitution(#[source] SubstitutionError),

    #[error("Package not found: {0}")]
    PackageNotFound(String),
}

impl From<SubstitutionError> for GenerationError {
    fn from(err: SubstitutionError) -> Self {
        // A missing share directory is the same failure as a missing executable package
        match err {
            SubstitutionError::PackageNotFound(package) => GenerationError::PackageNotFound(package),
            other => GenerationError::Substitution(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
