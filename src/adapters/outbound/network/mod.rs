/// Network adapters for registry-backed metadata
mod caching_provider;
mod pypi_client;

pub use caching_provider::CachingMetadataProvider;
pub use pypi_client::PyPiMetadataProvider;
