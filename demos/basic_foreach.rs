//! Example: ForEach writing one record per index
//!
//! Rows are written with a `|`-delimited CSV writer as a side effect; the
//! first failed write stops the pass.
//!
//! Usage:
//!   cargo run --example basic_foreach

use fanmap::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let names = vec!["John", "Peter", "Susan"];
    let ages = vec![12u32, 15, 13];
    let heights = vec![1.23f64, 1.5, 1.14];

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'|')
        .from_writer(std::io::stdout());
    writer.write_record(["name", "age", "height"])?;

    for_each(
        |(name, age, height): (&str, u32, f64)| {
            writer.serialize((name, age, format!("{:.2}", height)))
        },
        (&names, &ages, &heights),
    )?;

    writer.flush()?;
    Ok(())
}
