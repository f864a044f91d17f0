//! Quote vs. conversion round trips against the mocked rollup processor

use alloy_primitives::U256;

use mstable_bridge_data::mocks::MockRollupProcessor;
use mstable_bridge_data::{BridgeDataBuilder, RollupProcessor};

mod mocks;

use mocks::{contracts, mint_request, redeem_request, BRIDGE, DAI, IMUSD};

#[tokio::test]
async fn mint_quote_matches_booked_balance_delta() {
	let (asset, savings) = contracts(200, 10, 5);
	let data = BridgeDataBuilder::new(asset.clone(), savings.clone()).build();
	let rollup = MockRollupProcessor::new(DAI, IMUSD, asset, savings);

	let deposit = U256::from(1_000_000u64);
	rollup.fund(DAI, deposit);
	let before = rollup.balance_of(IMUSD);

	let request = mint_request(1_000_000);
	let quote = data.get_expected_output(&request).await.unwrap();

	let converted = rollup
		.convert(
			BRIDGE,
			request.input_asset_a,
			request.input_asset_b,
			request.output_asset_a,
			request.output_asset_b,
			request.input_amount,
			1,
			request.aux_data,
		)
		.await
		.unwrap();

	assert!(!converted.is_async);
	assert_eq!(converted.output_value_a, quote.output_value_a);
	assert_eq!(
		rollup.balance_of(IMUSD),
		before + quote.output_value_a,
		"booked output balance must equal the quote"
	);
	assert_eq!(rollup.balance_of(DAI), U256::ZERO);
}

#[tokio::test]
async fn redeem_quote_matches_booked_balance_delta() {
	let (asset, savings) = contracts(200, 10, 5);
	let data = BridgeDataBuilder::new(asset.clone(), savings.clone()).build();
	let rollup = MockRollupProcessor::new(DAI, IMUSD, asset, savings);

	let redeemed = U256::from(1_000_000u64);
	rollup.fund(IMUSD, redeemed);
	let dai_before = rollup.balance_of(DAI);
	let imusd_before = rollup.balance_of(IMUSD);

	let request = redeem_request(1_000_000);
	let quote = data.get_expected_output(&request).await.unwrap();

	let converted = rollup
		.convert(
			BRIDGE,
			request.input_asset_a,
			request.input_asset_b,
			request.output_asset_a,
			request.output_asset_b,
			request.input_amount,
			2,
			request.aux_data,
		)
		.await
		.unwrap();

	assert!(!converted.is_async);
	assert_eq!(rollup.balance_of(DAI), dai_before + quote.output_value_a);
	assert_eq!(rollup.balance_of(IMUSD), imusd_before - redeemed);
}

#[tokio::test]
async fn convert_rejects_unfunded_input() {
	let (asset, savings) = contracts(200, 10, 5);
	let rollup = MockRollupProcessor::new(DAI, IMUSD, asset, savings);

	let request = mint_request(1_000);
	let err = rollup
		.convert(
			BRIDGE,
			request.input_asset_a,
			request.input_asset_b,
			request.output_asset_a,
			request.output_asset_b,
			request.input_amount,
			3,
			request.aux_data,
		)
		.await
		.unwrap_err();
	assert!(err.to_string().contains("insufficient balance"));
}
