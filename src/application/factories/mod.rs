mod formatter_factory;
mod presenter_factory;
mod provider_factory;

pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
pub use provider_factory::{ProviderFactory, Providers};
