//! Bridge Client
//!
//! Off-chain quoting for the DAI/imUSD bridge: expected swap output and
//! annualized yield estimates computed from external contract reads.

pub mod bridge_data;
pub mod errors;
pub mod onchain;

pub use bridge_data::BridgeData;
pub use errors::{BridgeDataError, BridgeDataResult};
pub use onchain::{EthCallClient, OnchainAssetContract, OnchainSavingsContract};
