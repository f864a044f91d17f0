//! Quote request model and validation

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::{QuoteValidationError, QuoteValidationResult};
use crate::models::{AssetKind, BridgeAsset};

/// Parameters of a single quote
///
/// The four asset slots mirror the conversion entry point of the rollup;
/// the B slots are `NotUsed` placeholders for the single-pair bridge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
	pub input_asset_a: BridgeAsset,
	pub input_asset_b: BridgeAsset,
	pub output_asset_a: BridgeAsset,
	pub output_asset_b: BridgeAsset,
	/// Unix timestamp (seconds) of the tranche expiry
	pub aux_data: u64,
	/// Input amount in the smallest unit of input asset A
	pub input_amount: U256,
}

impl QuoteRequest {
	/// Single-pair request: one ERC-20 in, one ERC-20 out, B slots unused
	pub fn single_pair(
		input: BridgeAsset,
		output: BridgeAsset,
		aux_data: u64,
		input_amount: U256,
	) -> Self {
		Self {
			input_asset_a: input,
			input_asset_b: BridgeAsset::not_used(),
			output_asset_a: output,
			output_asset_b: BridgeAsset::not_used(),
			aux_data,
			input_amount,
		}
	}

	/// Validate the request shape
	///
	/// Input asset A carries the traded token and must be a real ERC-20;
	/// whether its address is one the bridge supports is decided by the
	/// client against its configured token pair.
	pub fn validate(&self) -> QuoteValidationResult<()> {
		if self.input_asset_a.kind != AssetKind::Erc20 {
			return Err(QuoteValidationError::InvalidInputAsset {
				reason: format!(
					"input asset A must be an ERC-20 token, got {:?}",
					self.input_asset_a.kind
				),
			});
		}

		if self.input_asset_a.address == Address::ZERO {
			return Err(QuoteValidationError::InvalidInputAsset {
				reason: "input asset A address must not be zero".to_string(),
			});
		}

		Ok(())
	}
}
