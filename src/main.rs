use std::net::SocketAddr;

use fanmap::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::info;

fn main() {
    CliApp::new("fanmap").run(parse_args, run_sum_server);
}

/// Parse and validate command-line arguments
fn parse_args(args: Vec<String>) -> Result<SocketAddr, AppError> {
    let [_, port] = args.as_slice() else {
        return Err(AppError::InvalidArguments(
            "Usage: fanmap <port>".to_string(),
        ));
    };

    let port: u16 = port
        .parse()
        .map_err(|_| AppError::InvalidArguments(format!("Invalid port: {}", port)))?;
    Ok(SocketAddr::from(([0, 0, 0, 0], port)))
}

/// Serve `Agg.Sum` until interrupted
async fn run_sum_server(addr: SocketAddr, token: CancellationToken) -> Result<(), AppError> {
    let server = RpcServer::bind(addr, Aggregator).await?;
    info!(addr = %server.local_addr()?, "Summation server listening");

    server.serve(token).await?;
    info!("Summation server stopped");
    Ok(())
}
