use std::io;
use thiserror::Error;
use tokio_util::codec::LinesCodecError;

use crate::value::Value;

/// Errors talking to (or serving) the summation service
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Framing error: {0}")]
    Codec(#[from] LinesCodecError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Connection closed before a reply arrived")]
    ConnectionClosed,

    #[error("Reply carried neither a result nor an error")]
    MissingResult,

    #[error("Reply id {got:?} does not match request id {expected}")]
    IdMismatch { expected: u64, got: Option<u64> },

    #[error("Unexpected result: {0}")]
    UnexpectedResult(Value),
}
