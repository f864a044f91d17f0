//! Configuration settings structures
//!
//! Token and contract addresses are configuration, never literals in the
//! client, so the same code quotes against a fork, a testnet, or mainnet.

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub tokens: TokenSettings,
	pub contracts: ContractSettings,
	pub rpc: RpcSettings,
	pub quoting: QuotingSettings,
	pub logging: LoggingSettings,
}

/// The two tokens the bridge converts between
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenSettings {
	/// Deposit token (the stablecoin side)
	pub deposit_token: Address,
	/// Yield-bearing token (the wrapped savings side)
	pub yield_token: Address,
}

/// Addresses of the contracts the client reads from
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ContractSettings {
	/// Savings contract exposing the exchange rate
	pub savings: Address,
	/// Asset contract exposing mint/redeem previews
	pub masset: Address,
}

/// JSON-RPC endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RpcSettings {
	pub endpoint: String,
	/// Request timeout for contract reads, in milliseconds
	pub request_timeout_ms: u64,
}

/// Quote-shaping configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuotingSettings {
	/// Auxiliary data value returned to callers that do not supply their own
	pub default_aux_data: u64,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			tokens: TokenSettings::default(),
			contracts: ContractSettings::default(),
			rpc: RpcSettings::default(),
			quoting: QuotingSettings::default(),
			logging: LoggingSettings::default(),
		}
	}
}

impl Default for TokenSettings {
	fn default() -> Self {
		Self {
			// Mainnet DAI
			deposit_token: address!("6B175474E89094C44Da98b954EedeAC495271d0F"),
			// Mainnet imUSD
			yield_token: address!("30647a72Dc82d7Fbb1123EA74716aB8A317Eac19"),
		}
	}
}

impl Default for ContractSettings {
	fn default() -> Self {
		Self {
			// imUSD doubles as the savings contract
			savings: address!("30647a72Dc82d7Fbb1123EA74716aB8A317Eac19"),
			// Mainnet mUSD
			masset: address!("e2f2a5C287993345a840Db3B0845fbC70f5935a5"),
		}
	}
}

impl Default for RpcSettings {
	fn default() -> Self {
		Self {
			endpoint: "http://localhost:8545".to_string(),
			request_timeout_ms: 10_000,
		}
	}
}

impl Default for QuotingSettings {
	fn default() -> Self {
		Self {
			default_aux_data: 100,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_tokens_are_distinct() {
		let settings = Settings::default();
		assert_ne!(
			settings.tokens.deposit_token,
			settings.tokens.yield_token
		);
	}

	#[test]
	fn default_savings_matches_yield_token() {
		let settings = Settings::default();
		assert_eq!(settings.contracts.savings, settings.tokens.yield_token);
	}

	#[test]
	fn settings_deserialize_with_partial_input() {
		let json = r#"{ "rpc": { "endpoint": "http://fork:8545", "request_timeout_ms": 500 } }"#;
		let settings: Settings = serde_json::from_str(json).unwrap();
		assert_eq!(settings.rpc.endpoint, "http://fork:8545");
		assert_eq!(settings.quoting.default_aux_data, 100);
	}
}
