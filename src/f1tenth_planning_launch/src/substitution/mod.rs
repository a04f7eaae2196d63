//! Substitution module

pub mod context;
pub mod package;
pub mod path;
pub mod types;

pub use context::LaunchContext;
pub use package::PackageIndex;
pub use path::path_join;
pub use types::{resolve_substitutions, Substitution};
