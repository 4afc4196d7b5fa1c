/// Shared kernel - error types and utilities used across all layers
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
