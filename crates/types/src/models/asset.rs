//! Bridge asset models
//!
//! Assets are transient value objects describing one side of a conversion.
//! A `NotUsed` asset is a valid placeholder for single-sided operations.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Kind of asset referenced by a conversion leg
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
	/// Placeholder for an unused slot in a single-sided operation
	#[default]
	NotUsed,
	/// Native ether
	Eth,
	/// ERC-20 token identified by its contract address
	Erc20,
	/// Virtual asset tracked only inside the rollup
	Virtual,
}

/// Asset reference as the rollup sees it
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BridgeAsset {
	/// Rollup-assigned asset id
	pub id: u64,
	/// Contract address (zero for non-ERC-20 kinds)
	pub address: Address,
	/// What the address field means
	pub kind: AssetKind,
}

impl BridgeAsset {
	/// ERC-20 asset at the given address
	pub fn erc20(id: u64, address: Address) -> Self {
		Self {
			id,
			address,
			kind: AssetKind::Erc20,
		}
	}

	/// Placeholder for an unused leg
	pub fn not_used() -> Self {
		Self::default()
	}

	/// Whether this asset occupies its slot
	pub fn is_used(&self) -> bool {
		self.kind != AssetKind::NotUsed
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	const DAI: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");

	#[test]
	fn erc20_constructor_sets_kind() {
		let asset = BridgeAsset::erc20(1, DAI);
		assert_eq!(asset.kind, AssetKind::Erc20);
		assert_eq!(asset.address, DAI);
		assert!(asset.is_used());
	}

	#[test]
	fn not_used_is_zeroed() {
		let asset = BridgeAsset::not_used();
		assert_eq!(asset.kind, AssetKind::NotUsed);
		assert_eq!(asset.address, Address::ZERO);
		assert!(!asset.is_used());
	}

	#[test]
	fn serde_round_trip() {
		let asset = BridgeAsset::erc20(2, DAI);
		let json = serde_json::to_string(&asset).unwrap();
		let back: BridgeAsset = serde_json::from_str(&json).unwrap();
		assert_eq!(asset, back);
	}
}
