//! Package share directory lookup

use std::path::{Path, PathBuf};

/// Ordered set of install prefixes searched for package resources.
///
/// Mirrors the ament layout: a package `pkg` installed under `prefix` has its
/// static resources in `prefix/share/pkg` and its executables in
/// `prefix/lib/pkg`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageIndex {
    prefixes: Vec<PathBuf>,
}

impl PackageIndex {
    pub fn new(prefixes: Vec<PathBuf>) -> Self {
        Self { prefixes }
    }

    /// Build an index from `AMENT_PREFIX_PATH` (colon-separated).
    pub fn from_env() -> Self {
        match std::env::var("AMENT_PREFIX_PATH") {
            Ok(value) => Self::from_prefix_path(&value),
            Err(_) => {
                log::debug!("AMENT_PREFIX_PATH is not set, package index is empty");
                Self::default()
            }
        }
    }

    pub fn from_prefix_path(value: &str) -> Self {
        let prefixes = value
            .split(':')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .collect();
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[PathBuf] {
        &self.prefixes
    }

    /// Return the first install prefix that provides `package`.
    pub fn find_prefix(&self, package: &str) -> Option<&Path> {
        self.prefixes
            .iter()
            .find(|prefix| prefix.join("share").join(package).is_dir())
            .map(PathBuf::as_path)
    }

    /// Find the share directory of `package`.
    pub fn find_share(&self, package: &str) -> Option<PathBuf> {
        self.find_prefix(package)
            .map(|prefix| prefix.join("share").join(package))
    }

    /// Find the executable path of `executable` in `package`.
    ///
    /// The file itself is not required to exist; only the package must be
    /// installed.
    pub fn find_executable(&self, package: &str, executable: &str) -> Option<PathBuf> {
        self.find_prefix(package)
            .map(|prefix| prefix.join("lib").join(package).join(executable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_prefix_path() {
        let index = PackageIndex::from_prefix_path("/opt/ros/humble::/ws/install/foo:");
        assert_eq!(
            index.prefixes(),
            &[
                PathBuf::from("/opt/ros/humble"),
                PathBuf::from("/ws/install/foo")
            ]
        );
    }

    #[test]
    fn test_find_share_first_prefix_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::create_dir_all(first.path().join("share/pkg_a")).unwrap();
        fs::create_dir_all(second.path().join("share/pkg_a")).unwrap();
        fs::create_dir_all(second.path().join("share/pkg_b")).unwrap();

        let index = PackageIndex::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);

        assert_eq!(
            index.find_share("pkg_a"),
            Some(first.path().join("share/pkg_a"))
        );
        assert_eq!(
            index.find_share("pkg_b"),
            Some(second.path().join("share/pkg_b"))
        );
        assert_eq!(index.find_share("pkg_c"), None);
    }

    #[test]
    fn test_find_executable() {
        let prefix = TempDir::new().unwrap();
        fs::create_dir_all(prefix.path().join("share/traj_selector")).unwrap();

        let index = PackageIndex::new(vec![prefix.path().to_path_buf()]);
        assert_eq!(
            index.find_executable("traj_selector", "traj_selector"),
            Some(prefix.path().join("lib/traj_selector/traj_selector"))
        );
        assert_eq!(index.find_executable("missing", "missing"), None);
    }
}
