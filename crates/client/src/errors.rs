//! Error types for quote client operations

use alloy_primitives::Address;
use bridge_types::{ContractError, QuoteValidationError};
use thiserror::Error;

/// Failures surfaced by the quote client
#[derive(Error, Debug)]
pub enum BridgeDataError {
	#[error("Quote validation failed: {0}")]
	Validation(#[from] QuoteValidationError),

	#[error("Unsupported asset: {address} is neither the deposit nor the yield token")]
	UnsupportedAsset { address: Address },

	#[error("Contract read failed: {0}")]
	Contract(#[from] ContractError),

	#[error("Arithmetic failure: {reason}")]
	Arithmetic { reason: String },

	#[error("Unsupported operation: {operation}")]
	UnsupportedOperation { operation: String },
}

impl BridgeDataError {
	/// Arithmetic failure with the given reason
	pub fn arithmetic(reason: impl Into<String>) -> Self {
		Self::Arithmetic {
			reason: reason.into(),
		}
	}
}

/// Result alias for quote client operations
pub type BridgeDataResult<T> = Result<T, BridgeDataError>;
