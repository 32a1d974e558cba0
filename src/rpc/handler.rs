use async_trait::async_trait;

use super::protocol::SUM_METHOD;
use crate::apply::try_fold;
use crate::value::Value;

/// Server-side dispatch of one request
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    /// Handle `method` with its positional params, or describe the failure
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, String>;
}

/// Serves `Agg.Sum`: the sum of a single list of integers
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator;

impl Aggregator {
    /// Checked sum of integer values
    pub fn sum(values: &[Value]) -> Result<i64, String> {
        let ints = values
            .iter()
            .map(|v| {
                v.as_int()
                    .ok_or_else(|| format!("expected int, found {}", v.kind()))
            })
            .collect::<Result<Vec<i64>, String>>()?;

        let total = try_fold(
            |a: i64, b: i64| a.checked_add(b).ok_or_else(|| "sum overflow".to_string()),
            std::iter::once(0).chain(ints),
        )?;
        Ok(total.unwrap_or(0))
    }
}

#[async_trait]
impl Handler for Aggregator {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, String> {
        match method {
            SUM_METHOD => match params.as_slice() {
                [Value::List(items)] => Aggregator::sum(items).map(Value::Int),
                _ => Err(format!("{} expects a single list of integers", SUM_METHOD)),
            },
            other => Err(format!("rpc: can't find method {}", other)),
        }
    }
}
