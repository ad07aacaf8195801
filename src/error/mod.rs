//! Error handling for the API
//!
//! Split into the error taxonomy itself (`types`) and its conversion into
//! HTTP responses (`conversion`).

pub mod conversion;
pub mod types;

pub use types::ApiError;

/// Convenience alias for handler return types
pub type ApiResult<T> = Result<T, ApiError>;
