#![forbid(unsafe_code)]
#![doc = "Common types and error codes for pemder."]

pub mod error;
pub mod key;

pub use error::*;
pub use key::*;
