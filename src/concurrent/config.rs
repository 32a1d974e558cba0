/// Which error a fan-out keeps when more than one unit fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorRetention {
    /// Keep the error whose signal arrived last (DEFAULT)
    ///
    /// Arrival order follows the scheduler, not the index order, so with
    /// several failures the surviving error is not deterministic.
    #[default]
    LastObserved,

    /// Keep the error whose signal arrived first
    FirstObserved,
}

/// Concurrent applicator with configurable fan-out
///
/// Every index gets its own tokio task. By default nothing bounds how many
/// run at once; [`FanOut::with_max_concurrency`] caps the number of units
/// executing the user function simultaneously.
///
/// # Example
/// ```rust,ignore
/// let sums = FanOut::new()
///     .with_max_concurrency(8)
///     .with_retention(ErrorRetention::FirstObserved)
///     .map(|t: Vec<i64>, _| async move { Ok::<_, String>(t.iter().sum::<i64>()) }, [a, b])
///     .await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct FanOut {
    pub(crate) max_concurrency: Option<usize>,
    pub(crate) retention: ErrorRetention,
}

impl FanOut {
    /// Unbounded fan-out keeping the last observed error
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of units running the user function at once
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = Some(limit.max(1));
        self
    }

    /// Remove any concurrency cap (the default)
    pub fn unbounded(mut self) -> Self {
        self.max_concurrency = None;
        self
    }

    /// Choose which error survives when several units fail
    pub fn with_retention(mut self, retention: ErrorRetention) -> Self {
        self.retention = retention;
        self
    }

    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    pub fn retention(&self) -> ErrorRetention {
        self.retention
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unbounded_last_observed() {
        let fan_out = FanOut::new();
        assert_eq!(fan_out.max_concurrency(), None);
        assert_eq!(fan_out.retention(), ErrorRetention::LastObserved);
    }

    #[test]
    fn concurrency_cap_is_at_least_one() {
        assert_eq!(FanOut::new().with_max_concurrency(0).max_concurrency(), Some(1));
        assert_eq!(FanOut::new().with_max_concurrency(4).max_concurrency(), Some(4));
        assert_eq!(
            FanOut::new().with_max_concurrency(4).unbounded().max_concurrency(),
            None
        );
    }

    #[test]
    fn retention_is_configurable() {
        let fan_out = FanOut::new().with_retention(ErrorRetention::FirstObserved);
        assert_eq!(fan_out.retention(), ErrorRetention::FirstObserved);
    }
}
