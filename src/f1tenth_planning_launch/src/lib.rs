//! f1tenth_planning_launch library
//!
//! Composes the launch plan of the F1TENTH planning stack: the trajectory
//! loader inclusion under the `planning` namespace, `traj_selector` and
//! `env_perceiver`, with their parameter files and topic remappings.

pub mod actions;
pub mod compose;
pub mod condition;
pub mod config;
pub mod error;
pub mod ir;
pub mod params;
pub mod record;
pub mod substitution;

pub use compose::{compose, compose_with, declared_arguments, PlanningArguments};
pub use config::PlanningConfig;
pub use error::{LaunchError, Result};
pub use ir::{LaunchPlan, LaunchStep};
pub use record::RecordJson;

use record::CommandGenerator;
use std::collections::HashMap;
use substitution::{LaunchContext, PackageIndex};

/// Resolve `name:=value` launch arguments and compose the plan.
pub fn compose_from_cli_args(
    config: &PlanningConfig,
    cli_args: &HashMap<String, String>,
) -> Result<LaunchPlan> {
    let declarations = declared_arguments();
    let mut context = LaunchContext::new();

    for declaration in &declarations {
        declaration.apply(&mut context, cli_args)?;
    }

    for name in cli_args.keys() {
        if !declarations.iter().any(|d| &d.name == name) {
            log::warn!("Ignoring undeclared launch argument: {}", name);
        }
    }

    let args = PlanningArguments::from_context(&context)?;
    Ok(compose_with(config, &args))
}

/// Resolve a plan into a record against installed packages.
pub fn generate_record(plan: &LaunchPlan, package_index: PackageIndex) -> Result<RecordJson> {
    let context = LaunchContext::new().with_package_index(package_index);
    Ok(CommandGenerator::generate(plan, &context)?)
}
