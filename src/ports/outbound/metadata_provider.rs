use crate::graph_analysis::domain::PackageId;
use crate::shared::Result;

/// MetadataProvider port returning the declared direct dependencies of a package
///
/// Implementations must return `Ok(vec![])` when the package simply does not
/// exist in their source. `Err` is reserved for "could not find out" (network
/// down, tool crashed, unparsable response); the graph builder records such
/// packages as having no dependencies and carries on, so an error here never
/// aborts a build.
///
/// Returned names are raw; canonicalisation is the builder's job.
pub trait MetadataProvider {
    fn get_direct_dependencies(&self, package: &PackageId) -> Result<Vec<String>>;
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for &T {
    fn get_direct_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
        (**self).get_direct_dependencies(package)
    }
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for Box<T> {
    fn get_direct_dependencies(&self, package: &PackageId) -> Result<Vec<String>> {
        (**self).get_direct_dependencies(package)
    }
}
