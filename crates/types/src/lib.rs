//! Bridge Types
//!
//! Shared models and traits for the mStable bridge data client.
//! This crate contains all domain models organized by business entity.

pub mod constants;
pub mod contracts;
pub mod models;
pub mod quotes;

// Re-export serde_json for convenience
pub use serde_json;

// Re-export commonly used types for convenience
pub use models::{
	AssetKind, BatchSwapStep, BridgeAsset, ConvertResult, FundManagement, SwapKind, TranchePool,
};

pub use quotes::{
	AuxDataField, QuoteRequest, QuoteResult, QuoteValidationError, QuoteValidationResult,
	SolidityType, AUX_DATA_CONFIG,
};

pub use contracts::{
	AssetContract, BatchSwapSimulator, ContractError, ContractResult, PoolRegistry,
	RollupProcessor, SavingsContract,
};

pub use constants::{SCALING_FACTOR, SECONDS_PER_YEAR};
