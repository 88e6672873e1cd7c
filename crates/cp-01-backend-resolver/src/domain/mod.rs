//! # Domain Layer
//!
//! Core types and errors of the backend resolver.

pub mod entities;
pub mod errors;

pub use entities::{
    ContractCallSpec, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ResolvedBackend,
};
pub use errors::{AbiDecodeError, ResolveError, RpcTransportError};
