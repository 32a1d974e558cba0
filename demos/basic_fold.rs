//! Example: Fold a list of values with addition
//!
//! Also shows that fewer than two values fold to nothing.
//!
//! Usage:
//!   cargo run --example basic_fold

use fanmap::prelude::*;

fn main() {
    match fold(|a, b| a + b, 1..=10) {
        Some(total) => println!("{}", total),
        None => println!("nothing to fold"),
    }

    // A single value has nothing to combine with
    println!("{:?}", fold(|a: i32, b| a + b, [42]));

    // Loosely-typed values fold the same way once converted
    let values = to_values(&["a", "b", "c"]);
    let joined = fold(|a, b| Value::Str(format!("{}{}", a, b)), values);
    println!("{}", joined.unwrap_or_default());
}
