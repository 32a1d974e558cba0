use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Method name served by [`crate::rpc::Aggregator`]
pub const SUM_METHOD: &str = "Agg.Sum";

/// Longest accepted line on the wire
pub const MAX_LINE_LENGTH: usize = 1024 * 1024;

/// One request line: `{"method":"Agg.Sum","params":[[1,2,3]],"id":0}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

/// One reply line: `{"id":0,"result":6,"error":null}`
///
/// `id` is null when the request could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub id: Option<u64>,
    pub result: Option<Value>,
    pub error: Option<String>,
}

impl Request {
    pub fn new(id: u64, method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            method: method.into(),
            params,
            id,
        }
    }
}

impl Response {
    pub fn success(id: u64, result: Value) -> Self {
        Self {
            id: Some(id),
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(id: Option<u64>, error: impl Into<String>) -> Self {
        Self {
            id,
            result: None,
            error: Some(error.into()),
        }
    }
}
