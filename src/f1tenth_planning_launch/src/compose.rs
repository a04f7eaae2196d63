//! Launch plan composition for the planning stack

use crate::{
    actions::{DeclareArgumentAction, GroupAction, IncludeAction, IncludeArg, NodeAction},
    condition::IfCondition,
    config::{NodeConfig, PlanningConfig},
    error::{ArgumentError, Result},
    ir::{Expr, LaunchPlan, LaunchStep},
    params::ParameterFile,
    substitution::{path_join, LaunchContext},
};

pub const MAP_PATH_ARG: &str = "map_path";
pub const USE_TRAJECTORY_LOADER_ARG: &str = "use_trajectory_loader";

/// Launch arguments declared by the planning launch description.
pub fn declared_arguments() -> Vec<DeclareArgumentAction> {
    vec![
        DeclareArgumentAction::required(MAP_PATH_ARG)
            .description("Map directory containing trajectory.csv"),
        DeclareArgumentAction::with_default(USE_TRAJECTORY_LOADER_ARG, "true")
            .description("Start the trajectory loader in the planning namespace"),
    ]
}

/// Resolved values of the declared launch arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanningArguments {
    pub map_path: String,
    pub use_trajectory_loader: bool,
}

impl PlanningArguments {
    pub fn new(map_path: impl Into<String>, use_trajectory_loader: bool) -> Self {
        Self {
            map_path: map_path.into(),
            use_trajectory_loader,
        }
    }

    /// Read the arguments back from a context the declarations were applied to.
    pub fn from_context(context: &LaunchContext) -> Result<Self> {
        let map_path = context
            .get_configuration(MAP_PATH_ARG)
            .ok_or_else(|| ArgumentError::MissingArgument(MAP_PATH_ARG.to_string()))?;

        let use_trajectory_loader =
            IfCondition::argument(USE_TRAJECTORY_LOADER_ARG).evaluate(context)?;

        Ok(Self {
            map_path,
            use_trajectory_loader,
        })
    }
}

/// Compose the planning launch plan with the default configuration.
pub fn compose(map_path: &str, use_trajectory_loader: bool) -> LaunchPlan {
    compose_with(
        &PlanningConfig::default(),
        &PlanningArguments::new(map_path, use_trajectory_loader),
    )
}

/// Compose the planning launch plan.
///
/// Pure: nothing is read from disk and nothing is validated. The steps are
/// always `[trajectory loader group, traj_selector, env_perceiver]`.
pub fn compose_with(config: &PlanningConfig, args: &PlanningArguments) -> LaunchPlan {
    let loader = &config.trajectory_loader;
    let loader_params = ParameterFile::new(&config.launch_package, &loader.param_file);
    let csv_path = path_join(&[args.map_path.as_str(), config.trajectory_csv.as_str()]);

    log::debug!(
        "Composing planning launch: csv_path={}, use_trajectory_loader={}",
        csv_path,
        args.use_trajectory_loader
    );

    let loader_group = GroupAction {
        namespace: config.namespace.clone(),
        include: IncludeAction {
            package: loader.package.clone(),
            file: loader.launch_file.clone(),
            args: vec![
                IncludeArg {
                    name: "trajectory_loader_param_file".to_string(),
                    value: loader_params.to_expr(),
                },
                IncludeArg {
                    name: "csv_path".to_string(),
                    value: Expr::literal(csv_path),
                },
                IncludeArg {
                    name: "output_trajectory_topic".to_string(),
                    value: Expr::literal(loader.output_trajectory_topic.clone()),
                },
            ],
        },
        active: args.use_trajectory_loader,
    };

    LaunchPlan {
        arguments: declared_arguments(),
        steps: vec![
            LaunchStep::Group(loader_group),
            LaunchStep::Process(node_action(config, &config.traj_selector)),
            LaunchStep::Process(node_action(config, &config.env_perceiver)),
        ],
    }
}

fn node_action(config: &PlanningConfig, node: &NodeConfig) -> NodeAction {
    NodeAction {
        package: node.package.clone(),
        executable: node.executable.clone(),
        name: node.name.clone(),
        param_files: vec![ParameterFile::new(&config.launch_package, &node.param_file)],
        remappings: node.remappings.clone(),
        active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_arguments() {
        let args = declared_arguments();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "map_path");
        assert!(args[0].is_required());
        assert_eq!(args[1].name, "use_trajectory_loader");
        assert_eq!(args[1].default.as_deref(), Some("true"));
    }

    #[test]
    fn test_arguments_from_context() {
        let mut context = LaunchContext::new();
        context.set_configuration("map_path".to_string(), "/maps/track1".to_string());
        context.set_configuration("use_trajectory_loader".to_string(), "False".to_string());

        let args = PlanningArguments::from_context(&context).unwrap();
        assert_eq!(args, PlanningArguments::new("/maps/track1", false));
    }

    #[test]
    fn test_arguments_from_context_missing_map_path() {
        let mut context = LaunchContext::new();
        context.set_configuration("use_trajectory_loader".to_string(), "true".to_string());
        assert!(PlanningArguments::from_context(&context).is_err());
    }

    #[test]
    fn test_step_order() {
        let plan = compose("/maps/track1", true);
        assert_eq!(plan.steps.len(), 3);
        assert!(matches!(plan.steps[0], LaunchStep::Group(_)));
        assert_eq!(plan.steps[1].as_process().unwrap().name, "traj_selector");
        assert_eq!(plan.steps[2].as_process().unwrap().name, "env_perceiver");
    }

    #[test]
    fn test_param_files() {
        let plan = compose("/maps/track1", true);
        let selector = plan.process("traj_selector").unwrap();
        assert_eq!(
            selector.param_files,
            vec![ParameterFile::new(
                "f1tenth_launch",
                "config/planning/traj_selector_params.param.yaml"
            )]
        );
        let perceiver = plan.process("env_perceiver").unwrap();
        assert_eq!(
            perceiver.param_files[0].path,
            "config/planning/env_perceiver_params.param.yaml"
        );

        let include = &plan.groups().next().unwrap().include;
        assert_eq!(
            include.arg("trajectory_loader_param_file").unwrap().to_string(),
            "$(find-pkg-share f1tenth_launch)/config/planning/trajectory_loader.param.yaml"
        );
    }

    #[test]
    fn test_custom_config() {
        let mut config = PlanningConfig::default();
        config.namespace = "race".to_string();
        config.trajectory_csv = "raceline.csv".to_string();

        let plan = compose_with(&config, &PlanningArguments::new("/maps/monza", true));
        let group = plan.groups().next().unwrap();
        assert_eq!(group.namespace, "race");
        assert_eq!(
            group.include.arg("csv_path").and_then(Expr::as_literal),
            Some("/maps/monza/raceline.csv")
        );
    }
}
