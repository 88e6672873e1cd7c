//! # Algorithms
//!
//! Pure decoding functions, free of IO.

pub mod abi_string;

pub use abi_string::decode_abi_string;
