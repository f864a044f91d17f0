//! The bridge data client
//!
//! Produces off-chain, non-binding estimates of a conversion's output and of
//! its annualized yield. Every operation is a pure function of its inputs and
//! of fresh external reads; nothing is cached and nothing is mutated.

use std::sync::Arc;

use alloy_primitives::{Address, Bytes, Sign, I256, U256};
use chrono::{DateTime, Utc};
use tracing::debug;

use bridge_types::{
	AssetContract, AuxDataField, BatchSwapSimulator, BatchSwapStep, BridgeAsset, ContractError,
	FundManagement, PoolRegistry, QuoteRequest, QuoteResult, QuoteValidationError, SavingsContract,
	SwapKind, AUX_DATA_CONFIG, SCALING_FACTOR, SECONDS_PER_YEAR,
};

use crate::errors::{BridgeDataError, BridgeDataResult};

/// Off-chain quote client for the deposit/yield token pair
///
/// Token addresses are injected so the client is network agnostic; the
/// yearly-projection dependencies are optional because the corresponding
/// on-chain path is currently disabled upstream.
#[derive(Debug, Clone)]
pub struct BridgeData {
	deposit_token: Address,
	yield_token: Address,
	default_aux_data: u64,
	asset: Arc<dyn AssetContract>,
	savings: Arc<dyn SavingsContract>,
	pools: Option<Arc<dyn PoolRegistry>>,
	swaps: Option<Arc<dyn BatchSwapSimulator>>,
}

impl BridgeData {
	/// Create a client for the given token pair
	pub fn new(
		deposit_token: Address,
		yield_token: Address,
		default_aux_data: u64,
		asset: Arc<dyn AssetContract>,
		savings: Arc<dyn SavingsContract>,
	) -> Self {
		Self {
			deposit_token,
			yield_token,
			default_aux_data,
			asset,
			savings,
			pools: None,
			swaps: None,
		}
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

	/// The configured deposit token address
	pub fn deposit_token(&self) -> Address {
		self.deposit_token
	}

	/// The configured yield token address
	pub fn yield_token(&self) -> Address {
		self.yield_token
	}

	/// Expected immediate output of converting `input_amount` of input asset A
	///
	/// Deposit token in: the mint direction, `floor(mint_rate / exchange_rate)`.
	/// Yield token in: the redeem direction, `exchange_rate * redeem_rate`.
	/// Any other input address is rejected. Failures from the external reads
	/// propagate unmodified; there is no retry and no fallback.
	pub async fn get_expected_output(
		&self,
		request: &QuoteRequest,
	) -> BridgeDataResult<QuoteResult> {
		request.validate()?;

		let input = request.input_asset_a.address;
		let output = if input == self.deposit_token {
			let mint_rate = self.asset.preview_mint(self.deposit_token, U256::ONE).await?;
			let exchange_rate = self.savings.current_exchange_rate().await?;
			debug!(%mint_rate, %exchange_rate, "quoting mint direction");
			mint_rate
				.checked_div(exchange_rate)
				.ok_or_else(|| BridgeDataError::arithmetic("exchange rate is zero"))?
		} else if input == self.yield_token {
			let exchange_rate = self.savings.current_exchange_rate().await?;
			let redeem_rate = self
				.asset
				.preview_redeem(self.deposit_token, U256::ONE)
				.await?;
			debug!(%exchange_rate, %redeem_rate, "quoting redeem direction");
			// TODO: confirm with the bridge authors whether this branch should
			// divide by the exchange rate. Upstream multiplies here while the
			// mint branch divides, with no inverse relationship between the
			// two; we reproduce that behavior until it is clarified.
			exchange_rate
				.checked_mul(redeem_rate)
				.ok_or_else(|| BridgeDataError::arithmetic("redeem output overflows"))?
		} else {
			return Err(BridgeDataError::UnsupportedAsset { address: input });
		};

		Ok(QuoteResult::single(output))
	}

	/// Expected annualized output for the conversion
	///
	/// The contracted behavior is a zero stub; the historical projection is
	/// available behind the `yearly-projection` feature.
	#[cfg(not(feature = "yearly-projection"))]
	pub async fn get_expected_yearly_output(
		&self,
		_request: &QuoteRequest,
	) -> BridgeDataResult<QuoteResult> {
		Ok(QuoteResult::zero())
	}

	/// Expected annualized output for the conversion
	///
	/// Projects the interest accrued by redeeming `input_amount` units at the
	/// tranche pool onto a full year.
	#[cfg(feature = "yearly-projection")]
	pub async fn get_expected_yearly_output(
		&self,
		request: &QuoteRequest,
	) -> BridgeDataResult<QuoteResult> {
		self.projected_yearly_output(request, Utc::now()).await
	}

	/// The historical yearly-yield projection
	///
	/// Resolves the tranche pool for (input asset, expiry), simulates redeeming
	/// `input_amount` units, and scales the interest delta by the time left to
	/// expiry: `interest * SCALING_FACTOR / time_to_expiry * SECONDS_PER_YEAR
	/// / SCALING_FACTOR`, all in integer arithmetic truncating toward zero.
	/// `now` is a parameter so callers control the clock.
	pub async fn projected_yearly_output(
		&self,
		request: &QuoteRequest,
		now: DateTime<Utc>,
	) -> BridgeDataResult<QuoteResult> {
		request.validate()?;

		let precision = request.input_amount;
		if precision.is_zero() {
			return Err(QuoteValidationError::InvalidAmount {
				reason: "projection requires a nonzero input amount".to_string(),
			}
			.into());
		}

		let pools = self
			.pools
			.as_ref()
			.ok_or_else(|| BridgeDataError::UnsupportedOperation {
				operation: "yearly projection without a pool registry".to_string(),
			})?;
		let swaps = self
			.swaps
			.as_ref()
			.ok_or_else(|| BridgeDataError::UnsupportedOperation {
				operation: "yearly projection without a batch-swap simulator".to_string(),
			})?;

		let input = request.input_asset_a.address;
		let pool = pools.pool_for(input, request.aux_data).await?;

		let step = BatchSwapStep {
			pool_id: pool.pool_id,
			asset_in_index: 0,
			asset_out_index: 1,
			amount: precision,
			user_data: Bytes::new(),
		};
		let deltas = swaps
			.query_batch_swap(
				SwapKind::GivenIn,
				step,
				[input, pool.tranche],
				FundManagement::simulation(),
			)
			.await?;
		let output_delta = deltas.get(1).copied().ok_or_else(|| {
			ContractError::InvalidResponse {
				reason: "batch swap returned fewer than two deltas".to_string(),
			}
		})?;

		let precision_signed = to_signed(precision)
			.ok_or_else(|| BridgeDataError::arithmetic("input amount exceeds the signed range"))?;

		// A negative delta is the amount the pool pays out, so the interest
		// earned over the remaining term is -delta - precision.
		let interest = output_delta
			.checked_neg()
			.and_then(|paid_out| paid_out.checked_sub(precision_signed))
			.ok_or_else(|| BridgeDataError::arithmetic("interest overflows"))?;

		let now_seconds = now.timestamp();
		let expiry = i64::try_from(request.aux_data)
			.map_err(|_| BridgeDataError::arithmetic("expiry exceeds the signed range"))?;
		let time_to_expiry = expiry - now_seconds;
		if time_to_expiry <= 0 {
			return Err(BridgeDataError::arithmetic("expiry is not in the future"));
		}
		let time_to_expiry = to_signed(U256::from(time_to_expiry as u64))
			.ok_or_else(|| BridgeDataError::arithmetic("time to expiry exceeds the signed range"))?;

		let scaling = to_signed(SCALING_FACTOR)
			.ok_or_else(|| BridgeDataError::arithmetic("scaling factor exceeds the signed range"))?;
		let year = to_signed(U256::from(SECONDS_PER_YEAR))
			.ok_or_else(|| BridgeDataError::arithmetic("year constant exceeds the signed range"))?;

		let scaled = interest
			.checked_mul(scaling)
			.and_then(|scaled| scaled.checked_div(time_to_expiry))
			.ok_or_else(|| BridgeDataError::arithmetic("interest scaling overflows"))?;
		let yearly = scaled
			.checked_mul(year)
			.and_then(|yearly| yearly.checked_div(scaling))
			.ok_or_else(|| BridgeDataError::arithmetic("annualization overflows"))?;

		let projected = yearly
			.checked_add(precision_signed)
			.ok_or_else(|| BridgeDataError::arithmetic("projected output overflows"))?;
		if projected.is_negative() {
			return Err(BridgeDataError::arithmetic("projected output is negative"));
		}

		debug!(%projected, "yearly projection computed");
		Ok(QuoteResult::single(projected.unsigned_abs()))
	}

	/// Auxiliary data for a conversion over the given assets
	///
	/// A configured constant, identical for every asset pair.
	pub fn get_aux_data(
		&self,
		_input_asset_a: &BridgeAsset,
		_input_asset_b: &BridgeAsset,
		_output_asset_a: &BridgeAsset,
		_output_asset_b: &BridgeAsset,
	) -> Vec<u64> {
		vec![self.default_aux_data]
	}

	/// Schema of the auxiliary data word
	pub fn aux_data_config(&self) -> &'static [AuxDataField] {
		AUX_DATA_CONFIG
	}
}

fn to_signed(value: U256) -> Option<I256> {
	I256::checked_from_sign_and_abs(Sign::Positive, value)
}
