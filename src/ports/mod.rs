/// Ports module defining the interfaces between the graph core and the
/// outside world (package metadata sources, reference graphs, console, files).
pub mod outbound;
