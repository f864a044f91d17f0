//! mStable Bridge Data
//!
//! Off-chain quoting for a rollup bridge that swaps DAI for imUSD through the
//! mStable savings protocol: expected-output and expected-yearly-output
//! estimates for UI and estimation purposes, computed from read-only contract
//! calls.

use std::sync::Arc;
use std::time::Duration;

use bridge_client::{EthCallClient, OnchainAssetContract, OnchainSavingsContract};
use bridge_config::Settings;
use bridge_types::{AssetContract, BatchSwapSimulator, PoolRegistry, SavingsContract};

// Core domain types - the most commonly used types
pub use bridge_types::{
	AssetKind, AuxDataField, BatchSwapStep, BridgeAsset, ContractError, ContractResult,
	ConvertResult, FundManagement, QuoteRequest, QuoteResult, QuoteValidationError, RollupProcessor,
	SolidityType, SwapKind, TranchePool, AUX_DATA_CONFIG, SCALING_FACTOR, SECONDS_PER_YEAR,
};

// Client layer
pub use bridge_client::{BridgeData, BridgeDataError, BridgeDataResult};

// Config layer
pub use bridge_config::{init_tracing, load_config};

// Module aliases for advanced usage
pub mod types {
	pub use bridge_types::*;
}

pub mod config {
	pub use bridge_config::*;
}

pub mod client {
	pub use bridge_client::*;
}

pub mod mocks;

/// Builder pattern for configuring the quote client
///
/// The two read capabilities are required; settings and the
/// yearly-projection dependencies are optional.
pub struct BridgeDataBuilder {
	settings: Option<Settings>,
	asset: Arc<dyn AssetContract>,
	savings: Arc<dyn SavingsContract>,
	pools: Option<Arc<dyn PoolRegistry>>,
	swaps: Option<Arc<dyn BatchSwapSimulator>>,
}

impl BridgeDataBuilder {
	/// Builder over the given contract capabilities
	pub fn new(asset: Arc<dyn AssetContract>, savings: Arc<dyn SavingsContract>) -> Self {
		Self {
			settings: None,
			asset,
			savings,
			pools: None,
			swaps: None,
		}
	}

	/// Use custom settings instead of the defaults
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Attach a pool registry for the yearly projection
	pub fn with_pool_registry(mut self, pools: Arc<dyn PoolRegistry>) -> Self {
		self.pools = Some(pools);
		self
	}

	/// Attach a batch-swap simulator for the yearly projection
	pub fn with_batch_swap_simulator(mut self, swaps: Arc<dyn BatchSwapSimulator>) -> Self {
		self.swaps = Some(swaps);
		self
	}

	/// Build the quote client
	pub fn build(self) -> BridgeData {
		let settings = self.settings.unwrap_or_default();
		let mut data = BridgeData::new(
			settings.tokens.deposit_token,
			settings.tokens.yield_token,
			settings.quoting.default_aux_data,
			self.asset,
			self.savings,
		);
		if let Some(pools) = self.pools {
			data = data.with_pool_registry(pools);
		}
		if let Some(swaps) = self.swaps {
			data = data.with_batch_swap_simulator(swaps);
		}
		data
	}
}

/// Quote client reading from the chain through the configured RPC endpoint
pub fn from_rpc(settings: &Settings) -> BridgeDataResult<BridgeData> {
	let client = EthCallClient::new(
		settings.rpc.endpoint.clone(),
		Duration::from_millis(settings.rpc.request_timeout_ms),
	)?;
	let asset = Arc::new(OnchainAssetContract::new(
		client.clone(),
		settings.contracts.masset,
	));
	let savings = Arc::new(OnchainSavingsContract::new(
		client,
		settings.contracts.savings,
	));
	Ok(BridgeDataBuilder::new(asset, savings)
		.with_settings(settings.clone())
		.build())
}
