//! Quote result model

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Ordered pair of quoted output amounts
///
/// The bridge only ever produces a single meaningful output, so
/// `output_value_b` is always zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
	pub output_value_a: U256,
	pub output_value_b: U256,
}

impl QuoteResult {
	/// Result with a single meaningful output
	pub fn single(output_value_a: U256) -> Self {
		Self {
			output_value_a,
			output_value_b: U256::ZERO,
		}
	}

	/// The stubbed zero result
	pub fn zero() -> Self {
		Self::default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn single_zeroes_second_output() {
		let result = QuoteResult::single(U256::from(42u64));
		assert_eq!(result.output_value_a, U256::from(42u64));
		assert_eq!(result.output_value_b, U256::ZERO);
	}

	#[test]
	fn amounts_serialize_as_strings() {
		let result = QuoteResult::single(U256::from(20u64));
		let json = serde_json::to_string(&result).unwrap();
		assert!(json.contains("\"0x14\"") || json.contains("\"20\""));
	}
}
