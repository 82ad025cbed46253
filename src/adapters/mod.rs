/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: package-manager
/// processes, the PyPI registry, local repository files, the console and
/// report formatters.
pub mod outbound;
