//! Request and result shapes for swap simulation and conversion
//!
//! `BatchSwapStep` and `FundManagement` mirror the wire shapes the batch-swap
//! simulator expects; `ConvertResult` is what the external conversion entry
//! point reports back to the caller.

use alloy_primitives::{Address, Bytes, FixedBytes, U256};
use serde::{Deserialize, Serialize};

/// Direction of a simulated swap
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SwapKind {
	/// Input amount is fixed, output is solved for
	GivenIn,
	/// Output amount is fixed, input is solved for
	GivenOut,
}

/// One hop of a batch-swap simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchSwapStep {
	/// Pool the hop trades against
	pub pool_id: FixedBytes<32>,
	/// Index of the input asset in the assets array
	pub asset_in_index: u32,
	/// Index of the output asset in the assets array
	pub asset_out_index: u32,
	/// Amount traded, interpreted per `SwapKind`
	pub amount: U256,
	/// Opaque pool-specific data
	pub user_data: Bytes,
}

/// Source and destination of funds for a simulated swap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FundManagement {
	pub sender: Address,
	pub recipient: Address,
	pub from_internal_balance: bool,
	pub to_internal_balance: bool,
}

impl FundManagement {
	/// Funds descriptor for a pure simulation: zero addresses, external balances
	pub fn simulation() -> Self {
		Self {
			sender: Address::ZERO,
			recipient: Address::ZERO,
			from_internal_balance: false,
			to_internal_balance: false,
		}
	}
}

/// Tranche pool resolved from an (asset, expiry) pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranchePool {
	/// Address of the tranche token
	pub tranche: Address,
	/// Identifier of the pool trading the tranche
	pub pool_id: FixedBytes<32>,
}

/// Result reported by the external conversion entry point
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResult {
	/// Amount credited in output asset A
	pub output_value_a: U256,
	/// Amount credited in output asset B (always zero in this design)
	pub output_value_b: U256,
	/// Whether the interaction settles asynchronously
	pub is_async: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn simulation_funds_are_zeroed() {
		let funds = FundManagement::simulation();
		assert_eq!(funds.sender, Address::ZERO);
		assert_eq!(funds.recipient, Address::ZERO);
		assert!(!funds.from_internal_balance);
		assert!(!funds.to_internal_balance);
	}

	#[test]
	fn batch_swap_step_serializes_camel_case() {
		let step = BatchSwapStep {
			pool_id: FixedBytes::ZERO,
			asset_in_index: 0,
			asset_out_index: 1,
			amount: U256::from(10u64),
			user_data: Bytes::new(),
		};
		let json = serde_json::to_string(&step).unwrap();
		assert!(json.contains("poolId"));
		assert!(json.contains("assetInIndex"));
	}
}
