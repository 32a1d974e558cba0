//! Summation service over newline-delimited JSON-RPC
//!
//! A small remote collaborator for the concurrent applicators: each unit of
//! a fan-out can dial a different server and wait for its reply.

pub mod client;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod server;

// Re-export commonly used types
pub use client::{RpcClient, rpc_sum};
pub use error::RpcError;
pub use handler::{Aggregator, Handler};
pub use protocol::{Request, Response, SUM_METHOD};
pub use server::RpcServer;
