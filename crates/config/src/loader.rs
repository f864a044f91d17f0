//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};
use tracing::debug;

/// Load configuration from the config file and environment
///
/// Reads `config/config.{toml,json,yaml}` when present, then applies
/// `BRIDGE_`-prefixed environment variables on top (for example
/// `BRIDGE_RPC__ENDPOINT`). Missing sources fall back to defaults.
pub fn load_config() -> Result<Settings, ConfigError> {
	dotenvy::dotenv().ok();

	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(Environment::with_prefix("BRIDGE").separator("__"))
		.build()?;

	let settings: Settings = s.try_deserialize()?;
	debug!(
		endpoint = %settings.rpc.endpoint,
		"configuration loaded"
	);
	Ok(settings)
}
