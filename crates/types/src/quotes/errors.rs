//! Error types for quote request validation

use thiserror::Error;

/// Validation errors for quote requests
#[derive(Error, Debug)]
pub enum QuoteValidationError {
	#[error("Invalid input asset: {reason}")]
	InvalidInputAsset { reason: String },

	#[error("Invalid amount: {reason}")]
	InvalidAmount { reason: String },
}

/// Result alias for quote validation
pub type QuoteValidationResult<T> = Result<T, QuoteValidationError>;
