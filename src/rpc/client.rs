use futures::{SinkExt, StreamExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio_util::codec::{Framed, LinesCodec};
use tracing::debug;

use super::error::RpcError;
use super::protocol::{MAX_LINE_LENGTH, Request, Response, SUM_METHOD};
use crate::value::Value;

/// Client for one JSON-RPC connection; calls are answered in order
pub struct RpcClient {
    framed: Framed<TcpStream, LinesCodec>,
    next_id: u64,
}

impl RpcClient {
    /// Dial the server
    pub async fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self, RpcError> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self {
            framed: Framed::new(stream, LinesCodec::new_with_max_length(MAX_LINE_LENGTH)),
            next_id: 0,
        })
    }

    /// Send one request and wait for its reply
    pub async fn call(&mut self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let id = self.next_id;
        self.next_id += 1;

        let request = Request::new(id, method, params);
        debug!(id, method, "Sending request");
        self.framed.send(serde_json::to_string(&request)?).await?;

        let line = self.framed.next().await.ok_or(RpcError::ConnectionClosed)??;
        let response: Response = serde_json::from_str(&line)?;

        if response.id != Some(id) {
            return Err(RpcError::IdMismatch {
                expected: id,
                got: response.id,
            });
        }
        if let Some(e) = response.error {
            return Err(RpcError::Remote(e));
        }
        response.result.ok_or(RpcError::MissingResult)
    }

    /// Ask the server to sum `values`
    pub async fn sum(&mut self, values: &[i64]) -> Result<i64, RpcError> {
        let result = self
            .call(SUM_METHOD, vec![Value::list(values.iter().copied())])
            .await?;
        result.as_int().ok_or(RpcError::UnexpectedResult(result))
    }
}

/// Dial `addr`, sum `values` remotely and hang up
pub async fn rpc_sum<A: ToSocketAddrs>(addr: A, values: &[i64]) -> Result<i64, RpcError> {
    RpcClient::connect(addr).await?.sum(values).await
}
