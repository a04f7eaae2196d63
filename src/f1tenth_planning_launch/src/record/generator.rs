//! Command-line and record generation

use crate::actions::{IncludeAction, NodeAction};
use crate::error::GenerationError;
use crate::ir::{LaunchPlan, LaunchStep};
use crate::params::load_param_file;
use crate::record::types::{IncludeRecord, NodeRecord, RecordJson};
use crate::substitution::LaunchContext;
use std::path::Path;

pub struct CommandGenerator;

impl CommandGenerator {
    /// Resolve every active step of `plan` against the context's package index.
    pub fn generate(
        plan: &LaunchPlan,
        context: &LaunchContext,
    ) -> Result<RecordJson, GenerationError> {
        let mut record = RecordJson::new();

        for step in &plan.steps {
            if !step.active() {
                log::debug!("Skipping inactive step: {}", step_label(step));
                continue;
            }

            match step {
                LaunchStep::Group(group) => {
                    let scope = context.scoped(&group.namespace);
                    record
                        .include
                        .push(Self::generate_include_record(&group.include, &scope)?);
                }
                LaunchStep::Process(node) => {
                    record
                        .node
                        .push(Self::generate_node_record(node, context)?);
                }
            }
        }

        Ok(record)
    }

    pub fn generate_include_record(
        include: &IncludeAction,
        context: &LaunchContext,
    ) -> Result<IncludeRecord, GenerationError> {
        let file = include.file_expr().resolve(context)?;
        let args = include
            .args
            .iter()
            .map(|arg| Ok((arg.name.clone(), arg.value.resolve(context)?)))
            .collect::<Result<Vec<_>, GenerationError>>()?;

        log::info!("Including launch file: {}", file);

        Ok(IncludeRecord {
            package: include.package.clone(),
            file,
            namespace: context.current_namespace().to_string(),
            args,
        })
    }

    pub fn generate_node_record(
        node: &NodeAction,
        context: &LaunchContext,
    ) -> Result<NodeRecord, GenerationError> {
        let params_files = node
            .param_files
            .iter()
            .map(|file| file.resolve(context))
            .collect::<Result<Vec<_>, _>>()?;

        // Parameter files are loaded on a best-effort basis
        let mut params = Vec::new();
        for path in &params_files {
            match load_param_file(Path::new(path)) {
                Ok(file_params) => params.extend(file_params),
                Err(e) => log::warn!("Failed to load parameter file {}: {}", path, e),
            }
        }

        let cmd = Self::generate_node_command(node, context, &params_files)?;

        Ok(NodeRecord {
            executable: node.executable.clone(),
            package: node.package.clone(),
            name: node.name.clone(),
            namespace: context.current_namespace().to_string(),
            params,
            params_files,
            remaps: node
                .remappings
                .iter()
                .map(|r| (r.from.clone(), r.to.clone()))
                .collect(),
            cmd,
        })
    }

    pub fn generate_node_command(
        node: &NodeAction,
        context: &LaunchContext,
        params_files: &[String],
    ) -> Result<Vec<String>, GenerationError> {
        let exec_path = context
            .package_index()
            .find_executable(&node.package, &node.executable)
            .ok_or_else(|| GenerationError::PackageNotFound(node.package.clone()))?;

        let mut cmd = vec![exec_path.display().to_string(), "--ros-args".to_string()];

        cmd.push("-r".to_string());
        cmd.push(format!("__node:={}", node.name));
        cmd.push("-r".to_string());
        cmd.push(format!("__ns:={}", context.current_namespace()));

        for path in params_files {
            cmd.push("--params-file".to_string());
            cmd.push(path.clone());
        }

        for remap in &node.remappings {
            cmd.push("-r".to_string());
            cmd.push(remap.to_rule());
        }

        Ok(cmd)
    }
}

fn step_label(step: &LaunchStep) -> String {
    match step {
        LaunchStep::Group(group) => format!(
            "group '{}' including {}",
            group.namespace,
            group.include.file_expr()
        ),
        LaunchStep::Process(node) => format!("node '{}'", node.name),
    }
}
