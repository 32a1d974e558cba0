use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, warn};

use super::config::{ErrorRetention, FanOut};
use super::signal::{Signal, drain, join_units, spawn_unit};
use crate::apply::{ApplyError, Mapped};
use crate::shape::{SequenceSet, ShapeError, validate};

impl FanOut {
    /// Concurrent map: one task per index, results placed by index
    ///
    /// `f` is called on the caller's task to build each unit's future
    /// (receiving the Element Tuple and its index); the future itself runs on
    /// its own tokio task. The call returns only after every unit has
    /// signalled. Slot `i` always holds unit `i`'s value, or `R::default()`
    /// if unit `i` failed.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn map<S, R, E, F, Fut>(&self, mut f: F, seqs: S) -> Result<Mapped<R, E>, ShapeError>
    where
        S: SequenceSet,
        R: Default + Send + 'static,
        E: Send + 'static,
        F: FnMut(S::Tuple, usize) -> Fut,
        Fut: Future<Output = Result<R, E>> + Send + 'static,
    {
        let len = validate(&seqs)?;
        debug!(len, limit = ?self.max_concurrency, "Fanning out map");

        let values = std::iter::repeat_with(R::default).take(len).collect();
        let mut mapped = Mapped::new(values);
        if len == 0 {
            return Ok(mapped);
        }

        let limiter = self.limiter();
        let (tx, rx) = mpsc::unbounded_channel();
        let handles: Vec<_> = (0..len)
            .map(|index| {
                let unit = f(seqs.tuple(index), index);
                spawn_unit(index, unit, tx.clone(), limiter.clone())
            })
            .collect();
        drop(tx);

        let keep_first = self.retention == ErrorRetention::FirstObserved;
        let received = drain(rx, len, |signal| match signal {
            Signal::Done { index, value } => mapped.values[index] = value,
            Signal::Failed { index, error } => {
                warn!(index, "Concurrent map unit failed");
                mapped.record_failure(error, keep_first);
            }
        })
        .await;

        if received < len {
            join_units(handles).await;
        }

        debug!(len, failures = mapped.failures, "Fan-in complete");
        Ok(mapped)
    }

    /// Concurrent for-each: one effect-only task per index
    ///
    /// Every unit runs to completion regardless of failures; the retained
    /// error follows [`ErrorRetention`].
    pub async fn for_each<S, E, F, Fut>(&self, mut f: F, seqs: S) -> Result<(), ApplyError<E>>
    where
        S: SequenceSet,
        E: Send + 'static,
        F: FnMut(S::Tuple, usize) -> Fut,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
    {
        let len = validate(&seqs)?;
        debug!(len, limit = ?self.max_concurrency, "Fanning out for-each");
        if len == 0 {
            return Ok(());
        }

        let limiter = self.limiter();
        let (tx, rx) = mpsc::unbounded_channel();
        let handles: Vec<_> = (0..len)
            .map(|index| {
                let unit = f(seqs.tuple(index), index);
                spawn_unit(index, unit, tx.clone(), limiter.clone())
            })
            .collect();
        drop(tx);

        let keep_first = self.retention == ErrorRetention::FirstObserved;
        let mut failures = 0usize;
        let mut retained = None;
        let received = drain(rx, len, |signal| {
            if let Signal::Failed { index, error } = signal {
                warn!(index, "Concurrent for-each unit failed");
                failures += 1;
                if !(keep_first && retained.is_some()) {
                    retained = Some(error);
                }
            }
        })
        .await;

        if received < len {
            join_units(handles).await;
        }

        debug!(len, failures, "Fan-in complete");
        match retained {
            Some(e) => Err(ApplyError::User(e)),
            None => Ok(()),
        }
    }

    fn limiter(&self) -> Option<Arc<Semaphore>> {
        self.max_concurrency
            .map(|limit| Arc::new(Semaphore::new(limit)))
    }
}

/// [`FanOut::map`] with the default unbounded configuration
pub async fn map_conc<S, R, E, F, Fut>(f: F, seqs: S) -> Result<Mapped<R, E>, ShapeError>
where
    S: SequenceSet,
    R: Default + Send + 'static,
    E: Send + 'static,
    F: FnMut(S::Tuple, usize) -> Fut,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
{
    FanOut::new().map(f, seqs).await
}

/// [`FanOut::for_each`] with the default unbounded configuration
pub async fn for_each_conc<S, E, F, Fut>(f: F, seqs: S) -> Result<(), ApplyError<E>>
where
    S: SequenceSet,
    E: Send + 'static,
    F: FnMut(S::Tuple, usize) -> Fut,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
{
    FanOut::new().for_each(f, seqs).await
}
