//! Mock contracts for examples and testing
//!
//! Test doubles implementing exactly the narrow capability interfaces the
//! client depends on, plus a stand-in for the rollup's conversion entry
//! point that books balances the way the forked-chain harness would.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use alloy_primitives::{Address, FixedBytes, Sign, I256, U256};
use async_trait::async_trait;
use tracing::debug;

use bridge_types::{
	AssetContract, BatchSwapSimulator, BatchSwapStep, BridgeAsset, ContractError, ContractResult,
	ConvertResult, FundManagement, PoolRegistry, RollupProcessor, SavingsContract, SwapKind,
	TranchePool,
};

/// `AssetContract` double returning fixed preview rates
#[derive(Debug, Clone)]
pub struct MockAssetContract {
	pub mint_rate: U256,
	pub redeem_rate: U256,
}

#[async_trait]
impl AssetContract for MockAssetContract {
	async fn preview_mint(&self, _deposit_asset: Address, _amount: U256) -> ContractResult<U256> {
		Ok(self.mint_rate)
	}

	async fn preview_redeem(&self, _deposit_asset: Address, _amount: U256) -> ContractResult<U256> {
		Ok(self.redeem_rate)
	}
}

/// `SavingsContract` double returning a fixed exchange rate
#[derive(Debug, Clone)]
pub struct MockSavingsContract {
	pub exchange_rate: U256,
}

#[async_trait]
impl SavingsContract for MockSavingsContract {
	async fn current_exchange_rate(&self) -> ContractResult<U256> {
		Ok(self.exchange_rate)
	}
}

/// `SavingsContract` double that fails every read, like a call against a
/// non-existent or reverting contract
#[derive(Debug, Clone, Default)]
pub struct RevertingSavingsContract;

#[async_trait]
impl SavingsContract for RevertingSavingsContract {
	async fn current_exchange_rate(&self) -> ContractResult<U256> {
		Err(ContractError::Rpc {
			code: 3,
			message: "execution reverted".to_string(),
		})
	}
}

/// `PoolRegistry` double resolving every (asset, expiry) pair to one pool
#[derive(Debug, Clone)]
pub struct MockPoolRegistry {
	pub pool: TranchePool,
}

impl MockPoolRegistry {
	pub fn new(tranche: Address, pool_id: FixedBytes<32>) -> Self {
		Self {
			pool: TranchePool { tranche, pool_id },
		}
	}
}

#[async_trait]
impl PoolRegistry for MockPoolRegistry {
	async fn pool_for(&self, _asset: Address, _expiry: u64) -> ContractResult<TranchePool> {
		Ok(self.pool)
	}
}

/// `BatchSwapSimulator` double paying out the traded amount plus a fixed
/// interest, reported as a negative output delta
#[derive(Debug, Clone)]
pub struct MockBatchSwapSimulator {
	pub interest: U256,
}

#[async_trait]
impl BatchSwapSimulator for MockBatchSwapSimulator {
	async fn query_batch_swap(
		&self,
		_kind: SwapKind,
		step: BatchSwapStep,
		_assets: [Address; 2],
		_funds: FundManagement,
	) -> ContractResult<Vec<I256>> {
		let paid_out = step
			.amount
			.checked_add(self.interest)
			.ok_or_else(|| ContractError::InvalidResponse {
				reason: "simulated payout overflows".to_string(),
			})?;
		let taken_in =
			I256::checked_from_sign_and_abs(Sign::Positive, step.amount).ok_or_else(|| {
				ContractError::InvalidResponse {
					reason: "traded amount exceeds the signed range".to_string(),
				}
			})?;
		let delta =
			I256::checked_from_sign_and_abs(Sign::Negative, paid_out).ok_or_else(|| {
				ContractError::InvalidResponse {
					reason: "simulated payout exceeds the signed range".to_string(),
				}
			})?;
		Ok(vec![taken_in, delta])
	}
}

/// Conversion harness stand-in
///
/// Books token balances and applies the same unit-rate arithmetic the quote
/// mirrors, so an integration test can check a quote against the balance
/// delta `convert` records.
pub struct MockRollupProcessor {
	deposit_token: Address,
	yield_token: Address,
	asset: Arc<dyn AssetContract>,
	savings: Arc<dyn SavingsContract>,
	balances: Mutex<HashMap<Address, U256>>,
}

impl MockRollupProcessor {
	pub fn new(
		deposit_token: Address,
		yield_token: Address,
		asset: Arc<dyn AssetContract>,
		savings: Arc<dyn SavingsContract>,
	) -> Self {
		Self {
			deposit_token,
			yield_token,
			asset,
			savings,
			balances: Mutex::new(HashMap::new()),
		}
	}

	/// Credit the processor with `amount` of `token` before a conversion
	pub fn fund(&self, token: Address, amount: U256) {
		let mut balances = self.balances.lock().expect("balance lock poisoned");
		let entry = balances.entry(token).or_insert(U256::ZERO);
		*entry += amount;
	}

	/// Balance currently booked for `token`
	pub fn balance_of(&self, token: Address) -> U256 {
		let balances = self.balances.lock().expect("balance lock poisoned");
		balances.get(&token).copied().unwrap_or(U256::ZERO)
	}
}

#[async_trait]
impl RollupProcessor for MockRollupProcessor {
	async fn convert(
		&self,
		bridge: Address,
		input_asset_a: BridgeAsset,
		_input_asset_b: BridgeAsset,
		output_asset_a: BridgeAsset,
		_output_asset_b: BridgeAsset,
		input_amount: U256,
		interaction_nonce: u64,
		_aux_data: u64,
	) -> ContractResult<ConvertResult> {
		let input = input_asset_a.address;
		let output_value_a = if input == self.deposit_token {
			let mint_rate = self.asset.preview_mint(self.deposit_token, U256::ONE).await?;
			let exchange_rate = self.savings.current_exchange_rate().await?;
			mint_rate
				.checked_div(exchange_rate)
				.ok_or_else(|| ContractError::Rpc {
					code: 3,
					message: "execution reverted: zero exchange rate".to_string(),
				})?
		} else if input == self.yield_token {
			let exchange_rate = self.savings.current_exchange_rate().await?;
			let redeem_rate = self
				.asset
				.preview_redeem(self.deposit_token, U256::ONE)
				.await?;
			exchange_rate
				.checked_mul(redeem_rate)
				.ok_or_else(|| ContractError::Rpc {
					code: 3,
					message: "execution reverted: redeem overflow".to_string(),
				})?
		} else {
			return Err(ContractError::Rpc {
				code: 3,
				message: "execution reverted: unsupported asset".to_string(),
			});
		};

		{
			let mut balances = self.balances.lock().expect("balance lock poisoned");
			let funded = balances.entry(input).or_insert(U256::ZERO);
			*funded = funded.checked_sub(input_amount).ok_or_else(|| {
				ContractError::Rpc {
					code: 3,
					message: "execution reverted: insufficient balance".to_string(),
				}
			})?;
			let credited = balances.entry(output_asset_a.address).or_insert(U256::ZERO);
			*credited += output_value_a;
		}

		debug!(%bridge, interaction_nonce, %output_value_a, "mock convert booked");
		Ok(ConvertResult {
			output_value_a,
			output_value_b: U256::ZERO,
			is_async: false,
		})
	}
}
