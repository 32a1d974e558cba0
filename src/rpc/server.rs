use std::net::SocketAddr;
use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tokio::task::JoinSet;
use tokio_util::codec::{Framed, LinesCodec};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::error::RpcError;
use super::handler::Handler;
use super::protocol::{MAX_LINE_LENGTH, Request, Response};

/// TCP server answering newline-delimited JSON-RPC requests
///
/// Each accepted connection is served on its own task and may carry any
/// number of requests, answered in order.
pub struct RpcServer<H> {
    listener: TcpListener,
    handler: Arc<H>,
}

impl<H: Handler> RpcServer<H> {
    /// Bind the listening socket
    pub async fn bind<A: ToSocketAddrs>(addr: A, handler: H) -> Result<Self, RpcError> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            listener,
            handler: Arc::new(handler),
        })
    }

    /// Address actually bound (useful after binding port 0)
    pub fn local_addr(&self) -> Result<SocketAddr, RpcError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until `token` is cancelled
    pub async fn serve(self, token: CancellationToken) -> Result<(), RpcError> {
        let mut connections = JoinSet::new();

        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    info!("Cancellation requested, no longer accepting connections");
                    break;
                }
                Some(_) = connections.join_next(), if !connections.is_empty() => {}
                accepted = self.listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(v) => v,
                        Err(e) => {
                            warn!(error = %e, "Failed to accept a TCP connection");
                            continue;
                        }
                    };

                    info!(%peer, "New connection established");
                    let handler = Arc::clone(&self.handler);
                    let token = token.clone();
                    connections.spawn(async move {
                        if let Err(e) = serve_connection(stream, handler, token).await {
                            warn!(%peer, error = %e, "Connection ended with an error");
                        }
                    });
                }
            }
        }

        connections.shutdown().await;
        Ok(())
    }
}

async fn serve_connection<H: Handler>(
    stream: TcpStream,
    handler: Arc<H>,
    token: CancellationToken,
) -> Result<(), RpcError> {
    let mut framed = Framed::new(stream, LinesCodec::new_with_max_length(MAX_LINE_LENGTH));

    loop {
        let line = tokio::select! {
            _ = token.cancelled() => return Ok(()),
            line = framed.next() => match line {
                Some(line) => line?,
                None => return Ok(()),
            },
        };

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => {
                debug!(id = request.id, method = %request.method, "Handling request");
                match handler.call(&request.method, request.params).await {
                    Ok(result) => Response::success(request.id, result),
                    Err(e) => Response::failure(Some(request.id), e),
                }
            }
            Err(e) => Response::failure(None, format!("invalid request: {}", e)),
        };

        framed.send(serde_json::to_string(&response)?).await?;
    }
}
