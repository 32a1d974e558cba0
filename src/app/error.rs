use std::io;
use thiserror::Error;

use crate::rpc::RpcError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
