//! Example: Filter and Count with an even predicate
//!
//! Usage:
//!   cargo run --example basic_filter

use fanmap::prelude::*;

fn main() {
    let numbers: Vec<i32> = (1..=10).collect();

    let evens = filter(|n| n % 2 == 0, &numbers);
    println!("{:?}", evens);

    let how_many = numbers.count_where(|n| n % 2 == 0);
    println!("{} even numbers", how_many);
}
