//! Example: Distribute sums across summation servers with MapConc
//!
//! Index `i` of the three input columns is summed by the server at
//! `addrs[i]`; the partial sums are then folded into one total.
//!
//! Start three servers first (one per terminal):
//!   cargo run -- 9991
//!   cargo run -- 9992
//!   cargo run -- 9993
//!
//! Then:
//!   cargo run --example conc_rpc_client
//!
//! Or pass your own addresses:
//!   cargo run --example conc_rpc_client -- 10.0.0.1:9991 10.0.0.2:9991 10.0.0.3:9991

use std::env;
use std::sync::Arc;

use fanmap::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut addrs: Vec<String> = env::args().skip(1).collect();
    if addrs.is_empty() {
        addrs = vec![
            "127.0.0.1:9991".to_string(),
            "127.0.0.1:9992".to_string(),
            "127.0.0.1:9993".to_string(),
        ];
    }
    if addrs.len() != 3 {
        eprintln!("Usage: conc_rpc_client [addr1 addr2 addr3]");
        std::process::exit(1);
    }
    let addrs = Arc::new(addrs);

    let sums = map_conc(
        |column: Vec<i64>, pos| {
            let addrs = Arc::clone(&addrs);
            async move { rpc_sum(addrs[pos].as_str(), &column).await }
        },
        [vec![1i64, 2, 3], vec![5, 6, 7], vec![9, 10, 11]],
    )
    .await?
    .into_result()?;

    eprintln!("Partial sums: {:?}", sums);

    let total = fold(|a, b| a + b, to_values(&sums).iter().filter_map(Value::as_int));
    println!("Sum={}", total.unwrap_or_default());
    Ok(())
}
