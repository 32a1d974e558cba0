//! Element-wise application of user functions over equal-length sequences
//!
//! - [`apply`]: sequential `map`, `for_each`, `filter`, `count`, `fold`
//! - [`concurrent`]: `map_conc` / `for_each_conc`, one tokio task per element
//! - [`shape`]: the shared precondition that inputs are sequences of one length
//! - [`value`]: loosely-typed elements for heterogeneous call sites
//! - [`rpc`]: a summation service used as a remote per-element collaborator

pub mod app;
pub mod apply;
pub mod concurrent;
pub mod prelude;
pub mod rpc;
pub mod shape;
pub mod value;
