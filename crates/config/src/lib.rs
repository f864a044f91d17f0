//! Bridge Config
//!
//! Settings structures, file/environment loading, and tracing setup.

pub mod loader;
pub mod settings;

pub use loader::load_config;
pub use settings::{
	ContractSettings, LogFormat, LoggingSettings, QuotingSettings, RpcSettings, Settings,
	TokenSettings,
};

use tracing_subscriber::EnvFilter;

/// Initialize tracing from the logging settings
///
/// The `RUST_LOG` environment variable takes precedence over the configured
/// level when set.
pub fn init_tracing(settings: &LoggingSettings) {
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(settings.level.clone()));

	match settings.format {
		LogFormat::Json => {
			tracing_subscriber::fmt()
				.json()
				.with_env_filter(env_filter)
				.init();
		},
		LogFormat::Pretty => {
			tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter)
				.init();
		},
		LogFormat::Compact => {
			tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter)
				.init();
		},
	}
}
