use crate::shared::Result;

/// InstalledPackageSource port listing every package available in the
/// environment, used as the seed set for whole-environment analyses.
pub trait InstalledPackageSource {
    /// Raw package names, in whatever order the source reports them.
    fn list_installed(&self) -> Result<Vec<String>>;
}

impl<T: InstalledPackageSource + ?Sized> InstalledPackageSource for Box<T> {
    fn list_installed(&self) -> Result<Vec<String>> {
        (**self).list_installed()
    }
}
