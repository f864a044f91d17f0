//! Shared fixtures for the end-to-end tests

use std::sync::Arc;

use alloy_primitives::{address, Address, U256};

use mstable_bridge_data::mocks::{MockAssetContract, MockSavingsContract};
use mstable_bridge_data::{BridgeAsset, BridgeData, BridgeDataBuilder, QuoteRequest};

pub const DAI: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
pub const IMUSD: Address = address!("30647a72Dc82d7Fbb1123EA74716aB8A317Eac19");
pub const BRIDGE: Address = address!("90ca5cef5b29342b229fb8ae2db5d8f4f894d652");

/// Fixed-rate doubles for the two read capabilities
pub fn contracts(
	mint_rate: u64,
	exchange_rate: u64,
	redeem_rate: u64,
) -> (Arc<MockAssetContract>, Arc<MockSavingsContract>) {
	(
		Arc::new(MockAssetContract {
			mint_rate: U256::from(mint_rate),
			redeem_rate: U256::from(redeem_rate),
		}),
		Arc::new(MockSavingsContract {
			exchange_rate: U256::from(exchange_rate),
		}),
	)
}

/// Quote client over fixed-rate doubles, default settings
pub fn bridge_data(mint_rate: u64, exchange_rate: u64, redeem_rate: u64) -> BridgeData {
	let (asset, savings) = contracts(mint_rate, exchange_rate, redeem_rate);
	BridgeDataBuilder::new(asset, savings).build()
}

/// DAI in, imUSD out
pub fn mint_request(amount: u64) -> QuoteRequest {
	QuoteRequest::single_pair(
		BridgeAsset::erc20(1, DAI),
		BridgeAsset::erc20(2, IMUSD),
		100,
		U256::from(amount),
	)
}

/// imUSD in, DAI out
pub fn redeem_request(amount: u64) -> QuoteRequest {
	QuoteRequest::single_pair(
		BridgeAsset::erc20(2, IMUSD),
		BridgeAsset::erc20(1, DAI),
		100,
		U256::from(amount),
	)
}
