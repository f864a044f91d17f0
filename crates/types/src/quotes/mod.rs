//! Quote request/result models and their validation

pub mod aux;
pub mod errors;
pub mod request;
pub mod response;

pub use aux::{AuxDataField, SolidityType, AUX_DATA_CONFIG};
pub use errors::{QuoteValidationError, QuoteValidationResult};
pub use request::QuoteRequest;
pub use response::QuoteResult;
