//! Error types for external contract reads

use thiserror::Error;

/// Failures surfaced by an external read-only contract call
///
/// These propagate to the caller unmodified; the client performs no retry,
/// fallback, or circuit breaking on top of them.
#[derive(Error, Debug)]
pub enum ContractError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Node returned error {code}: {message}")]
	Rpc { code: i64, message: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("ABI decoding failed: {reason}")]
	AbiDecode { reason: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result alias for contract reads
pub type ContractResult<T> = Result<T, ContractError>;
