//! Example: Map over three columns of different types
//!
//! Each index of `names`, `ages` and `heights` is turned into one table row.
//!
//! Usage:
//!   cargo run --example basic_map

use fanmap::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let names = vec!["John", "Peter", "Susan"];
    let ages = vec![12u32, 15, 13];
    let heights = vec![1.23f64, 1.5, 1.14];

    let persons = map(
        |(name, age, height): (&str, u32, f64)| {
            Ok::<_, String>(format!(
                "<tr><td>{}</td><td>{}</td><td>{:.6}</td></tr>",
                name, age, height
            ))
        },
        (&names, &ages, &heights),
    )?
    .into_result()?;

    for row in persons {
        println!("{}", row);
    }
    Ok(())
}
