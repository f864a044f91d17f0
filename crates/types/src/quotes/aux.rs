//! Auxiliary data schema
//!
//! Callers encode one 64-bit auxiliary value into each conversion; this
//! module describes how that field is laid out so front ends can build it.

use serde::{Deserialize, Serialize};

/// Solidity type of an encoded auxiliary field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SolidityType {
	Uint64,
}

/// Descriptor of one field inside the auxiliary data word
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuxDataField {
	/// Bit offset of the field
	pub start: u32,
	/// Width of the field in bits
	pub length: u32,
	/// Solidity type the field decodes to
	pub solidity_type: SolidityType,
	/// Human-readable description
	pub description: &'static str,
}

/// Schema of the bridge's auxiliary data: a single expiry timestamp
pub const AUX_DATA_CONFIG: &[AuxDataField] = &[AuxDataField {
	start: 0,
	length: 64,
	solidity_type: SolidityType::Uint64,
	description: "Unix timestamp of the tranche expiry",
}];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn schema_has_single_expiry_field() {
		assert_eq!(AUX_DATA_CONFIG.len(), 1);
		let field = &AUX_DATA_CONFIG[0];
		assert_eq!(field.start, 0);
		assert_eq!(field.length, 64);
		assert_eq!(field.solidity_type, SolidityType::Uint64);
		assert!(field.description.contains("expiry"));
	}
}
