//! Launch plan representation
//!
//! The fully composed, immutable output of composition: declared arguments
//! plus an ordered list of steps. Path expressions stay lazy so the plan can
//! be rendered without touching the filesystem and resolved later against a
//! package index.

use crate::{
    actions::{DeclareArgumentAction, GroupAction, NodeAction},
    error::SubstitutionError,
    substitution::{resolve_substitutions, LaunchContext, Substitution},
};
use serde::{Serialize, Serializer};
use std::fmt;

/// A lazy string expression (unevaluated substitution chain).
/// Evaluate with a `LaunchContext` to resolve to a concrete string.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr(pub Vec<Substitution>);

impl Expr {
    /// Create an `Expr` from a literal string (no substitutions).
    pub fn literal(s: impl Into<String>) -> Self {
        Expr(vec![Substitution::Text(s.into())])
    }

    /// If this expression is a literal, return its value.
    pub fn as_literal(&self) -> Option<&str> {
        match self.0.as_slice() {
            [Substitution::Text(s)] => Some(s.as_str()),
            _ => None,
        }
    }

    /// Resolve this expression against a `LaunchContext`.
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        resolve_substitutions(&self.0, context)
    }
}

impl From<Vec<Substitution>> for Expr {
    fn from(subs: Vec<Substitution>) -> Self {
        Expr(subs)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sub in &self.0 {
            write!(f, "{}", sub)?;
        }
        Ok(())
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One top-level entry of a launch plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LaunchStep {
    /// Namespaced group wrapping a conditional launch inclusion.
    Group(GroupAction),
    /// A process to spawn.
    Process(NodeAction),
}

impl LaunchStep {
    /// Whether the step contributes anything at spawn time.
    pub fn active(&self) -> bool {
        match self {
            LaunchStep::Group(group) => group.active,
            LaunchStep::Process(node) => node.active,
        }
    }

    pub fn as_group(&self) -> Option<&GroupAction> {
        match self {
            LaunchStep::Group(group) => Some(group),
            LaunchStep::Process(_) => None,
        }
    }

    pub fn as_process(&self) -> Option<&NodeAction> {
        match self {
            LaunchStep::Process(node) => Some(node),
            LaunchStep::Group(_) => None,
        }
    }
}

/// A complete, resolved launch plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchPlan {
    pub arguments: Vec<DeclareArgumentAction>,
    pub steps: Vec<LaunchStep>,
}

impl LaunchPlan {
    pub fn groups(&self) -> impl Iterator<Item = &GroupAction> {
        self.steps.iter().filter_map(LaunchStep::as_group)
    }

    pub fn processes(&self) -> impl Iterator<Item = &NodeAction> {
        self.steps.iter().filter_map(LaunchStep::as_process)
    }

    pub fn active_steps(&self) -> impl Iterator<Item = &LaunchStep> {
        self.steps.iter().filter(|step| step.active())
    }

    /// Find a process by node name.
    pub fn process(&self, name: &str) -> Option<&NodeAction> {
        self.processes().find(|node| node.name == name)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
