//! Capability traits for the external contracts the client reads from

use alloy_primitives::{Address, I256, U256};
use async_trait::async_trait;
use std::fmt::Debug;

use super::ContractResult;
use crate::models::{BatchSwapStep, BridgeAsset, ConvertResult, FundManagement, SwapKind, TranchePool};

/// Read-only view of the yield protocol's asset (mint/redeem previews)
#[async_trait]
pub trait AssetContract: Send + Sync + Debug {
	/// Estimated yield-token amount for minting with `amount` of `deposit_asset`
	async fn preview_mint(&self, deposit_asset: Address, amount: U256) -> ContractResult<U256>;

	/// Estimated deposit-asset amount for redeeming `amount` of yield token
	async fn preview_redeem(&self, deposit_asset: Address, amount: U256) -> ContractResult<U256>;
}

/// Read-only view of the savings contract
#[async_trait]
pub trait SavingsContract: Send + Sync + Debug {
	/// Current yield-token to deposit-asset exchange rate, in the protocol's
	/// own fixed-point convention. The client does not re-normalize it.
	async fn current_exchange_rate(&self) -> ContractResult<U256>;
}

/// Resolves the tranche pool a conversion with a given expiry trades against
#[async_trait]
pub trait PoolRegistry: Send + Sync + Debug {
	async fn pool_for(&self, asset: Address, expiry: u64) -> ContractResult<TranchePool>;
}

/// Simulates a batch swap without executing it
#[async_trait]
pub trait BatchSwapSimulator: Send + Sync + Debug {
	/// Returns the signed balance deltas per asset; a negative delta is an
	/// amount the swap pays out.
	async fn query_batch_swap(
		&self,
		kind: SwapKind,
		step: BatchSwapStep,
		assets: [Address; 2],
		funds: FundManagement,
	) -> ContractResult<Vec<I256>>;
}

/// The external conversion entry point of the rollup
///
/// Specified here only so integration tests can drive a double of it; the
/// quote client itself never calls `convert`.
#[async_trait]
pub trait RollupProcessor: Send + Sync {
	#[allow(clippy::too_many_arguments)]
	async fn convert(
		&self,
		bridge: Address,
		input_asset_a: BridgeAsset,
		input_asset_b: BridgeAsset,
		output_asset_a: BridgeAsset,
		output_asset_b: BridgeAsset,
		input_amount: U256,
		interaction_nonce: u64,
		aux_data: u64,
	) -> ContractResult<ConvertResult>;
}
