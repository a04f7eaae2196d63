//! Launch context for managing configurations

use crate::substitution::{package::PackageIndex, path::path_join};
use std::collections::HashMap;

/// Launch context holding configurations and state
#[derive(Debug, Clone)]
pub struct LaunchContext {
    configurations: HashMap<String, String>,
    namespace: String,
    package_index: PackageIndex,
}

impl LaunchContext {
    pub fn new() -> Self {
        Self {
            configurations: HashMap::new(),
            namespace: "/".to_string(),
            package_index: PackageIndex::default(),
        }
    }

    pub fn with_package_index(mut self, package_index: PackageIndex) -> Self {
        self.package_index = package_index;
        self
    }

    pub fn package_index(&self) -> &PackageIndex {
        &self.package_index
    }

    pub fn set_configuration(&mut self, name: String, value: String) {
        self.configurations.insert(name, value);
    }

    pub fn get_configuration(&self, name: &str) -> Option<String> {
        self.configurations.get(name).cloned()
    }

    /// Context for the body of a namespaced group.
    ///
    /// A relative namespace nests under the current one, an absolute one
    /// replaces it.
    pub fn scoped(&self, namespace: &str) -> Self {
        let joined = path_join(&[self.namespace.as_str(), namespace.trim()]);
        let joined = joined.trim_end_matches('/');

        let mut scope = self.clone();
        scope.namespace = if joined.is_empty() {
            "/".to_string()
        } else {
            joined.to_string()
        };
        scope
    }

    pub fn current_namespace(&self) -> &str {
        &self.namespace
    }
}

impl Default for LaunchContext {
    fn default() -> Self {
        Self::new()
    }
}
