mod log_level;
mod provider_variant;

pub use log_level::LogLevel;
pub use provider_variant::ProviderVariant;
