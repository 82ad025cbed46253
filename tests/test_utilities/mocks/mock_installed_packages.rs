use pkgdep_graph::prelude::*;

/// Mock InstalledPackageSource returning a fixed list, or failing
pub struct MockInstalledPackages {
    packages: Option<Vec<String>>,
}

#[allow(dead_code)]
impl MockInstalledPackages {
    pub fn new(packages: &[&str]) -> Self {
        Self {
            packages: Some(packages.iter().map(|p| p.to_string()).collect()),
        }
    }

    pub fn failing() -> Self {
        Self { packages: None }
    }
}

impl InstalledPackageSource for MockInstalledPackages {
    fn list_installed(&self) -> Result<Vec<String>> {
        self.packages
            .clone()
            .ok_or_else(|| anyhow::anyhow!("pip list failed"))
    }
}
