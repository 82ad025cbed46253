//! Graph analysis domain: identifiers, the dependency graph aggregate, and the
//! services that build, query and compare it. No I/O happens in here; metadata
//! arrives through the `MetadataProvider` port.
pub mod domain;
pub mod policies;
pub mod services;
