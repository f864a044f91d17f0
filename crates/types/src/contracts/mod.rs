//! External contract capabilities
//!
//! The quote client never talks to the chain directly; it depends on the
//! narrow read-only interfaces defined here. Live implementations issue
//! `eth_call`s, test doubles return canned values.

pub mod errors;
pub mod traits;

pub use errors::{ContractError, ContractResult};
pub use traits::{
	AssetContract, BatchSwapSimulator, PoolRegistry, RollupProcessor, SavingsContract,
};
