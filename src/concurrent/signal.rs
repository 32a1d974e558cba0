use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinHandle;

/// Completion signal sent by one unit of work
#[derive(Debug)]
pub(crate) enum Signal<R, E> {
    Done { index: usize, value: R },
    Failed { index: usize, error: E },
}

/// Launch one unit on its own task; it reports exactly one signal
///
/// With a limiter the unit holds a permit while the user future runs.
pub(crate) fn spawn_unit<R, E, Fut>(
    index: usize,
    unit: Fut,
    signals: mpsc::UnboundedSender<Signal<R, E>>,
    limiter: Option<Arc<Semaphore>>,
) -> JoinHandle<()>
where
    R: Send + 'static,
    E: Send + 'static,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
{
    tokio::spawn(async move {
        let _permit = match limiter {
            Some(semaphore) => semaphore.acquire_owned().await.ok(),
            None => None,
        };

        let signal = match unit.await {
            Ok(value) => Signal::Done { index, value },
            Err(error) => Signal::Failed { index, error },
        };

        // The receiver only goes away if the caller was dropped mid fan-in
        let _ = signals.send(signal);
    })
}

/// Receive exactly `expected` signals, in arrival order
///
/// Returns how many arrived. Fewer than `expected` means a unit ended
/// without signalling (it panicked).
pub(crate) async fn drain<R, E, F>(
    mut signals: mpsc::UnboundedReceiver<Signal<R, E>>,
    expected: usize,
    mut on_signal: F,
) -> usize
where
    F: FnMut(Signal<R, E>),
{
    let mut received = 0;
    while received < expected {
        match signals.recv().await {
            Some(signal) => {
                on_signal(signal);
                received += 1;
            }
            None => break,
        }
    }
    received
}

/// Wait for every task and re-raise the first panic on the caller
pub(crate) async fn join_units(handles: Vec<JoinHandle<()>>) {
    for handle in handles {
        if let Err(e) = handle.await
            && e.is_panic()
        {
            std::panic::resume_unwind(e.into_panic());
        }
    }
}
