//! Prelude module for convenient imports
//!
//! Import everything you need with: `use fanmap::prelude::*;`

// Shape types
pub use crate::shape::{Extent, Sequence, SequenceSet, ShapeError, validate};

// Sequential applicators
pub use crate::apply::{
    ApplyError, Mapped, SequenceExt, count, filter, fold, for_each, map, try_fold,
};

// Concurrent applicators
pub use crate::concurrent::{ErrorRetention, FanOut, for_each_conc, map_conc};

// Loosely-typed values
pub use crate::value::{Value, to_values};

// RPC types
pub use crate::rpc::{Aggregator, Handler, RpcClient, RpcError, RpcServer, SUM_METHOD, rpc_sum};

// App types
pub use crate::app::{AppError, CliApp, init_logging};
