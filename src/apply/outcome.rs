/// Result Container of a map-family operation
///
/// `values` always has one slot per input index. A slot whose user function
/// failed holds `R::default()`, so a present `error` means "may be
/// incomplete", not "unusable".
#[derive(Debug, Clone, PartialEq)]
pub struct Mapped<R, E> {
    pub values: Vec<R>,

    /// Last error observed, if any index failed
    pub error: Option<E>,

    /// Number of indices whose user function failed
    pub failures: usize,
}

impl<R, E> Mapped<R, E> {
    pub(crate) fn new(values: Vec<R>) -> Self {
        Self {
            values,
            error: None,
            failures: 0,
        }
    }

    pub(crate) fn record_failure(&mut self, error: E, keep_first: bool) {
        self.failures += 1;
        if !(keep_first && self.error.is_some()) {
            self.error = Some(error);
        }
    }

    /// True when every index produced a value
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Strict view: the values, or the retained error
    pub fn into_result(self) -> Result<Vec<R>, E> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.values),
        }
    }
}
