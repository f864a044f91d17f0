//! Shared domain models for bridge assets and swap simulation

pub mod asset;
pub mod swap;

pub use asset::{AssetKind, BridgeAsset};
pub use swap::{BatchSwapStep, ConvertResult, FundManagement, SwapKind, TranchePool};
