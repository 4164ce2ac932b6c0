//! Bounded, order-preserving parallel map over a tokio `JoinSet`.
//!
//! One coordinating future owns the input cursor and the result slots. Units of
//! work only hand back `(index, outcome)` through the `JoinSet`, so nothing is
//! shared between them and the coordinator besides the cancellation tokens.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, trace};

use crate::error::MapError;

/// Parallelism used when the caller has no preference.
pub const DEFAULT_PARALLELISM: usize = 2;

/// Cooperative cancellation flag shared by clones.
///
/// Cancelling is sticky: once set, every clone reports cancelled and every
/// pending [`CancelToken::cancelled`] future resolves.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once [`CancelToken::cancel`] has been called on any clone.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as `self`, so this only returns once set.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

enum Outcome<R, E> {
    Done(Result<R, E>),
    Cancelled,
}

/// Maps `transform` over `input` with at most `parallelism` units in flight.
///
/// Results come back in input order regardless of completion order. The first
/// unit to fail aborts the rest and its error is returned; if `cancel` fires,
/// no further units are started and [`MapError::Cancelled`] is returned. There
/// is no partial success. A `parallelism` of 0 is treated as 1.
///
/// `transform` is called on the coordinating task; the futures it returns are
/// spawned onto the current tokio runtime.
///
/// # Panics
///
/// Must be called within a tokio runtime. A panic inside a unit is resumed on
/// the caller.
///
/// # Example
///
/// ```
/// use aoc2025::parallel::{parallel_map, CancelToken};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let squares = parallel_map(vec![1, 2, 3], 2, &CancelToken::new(), |x: u64| async move {
///     Ok::<_, std::convert::Infallible>(x * x)
/// })
/// .await
/// .unwrap();
/// assert_eq!(squares, vec![1, 4, 9]);
/// # }
/// ```
pub async fn parallel_map<I, F, Fut, R, E>(
    input: I,
    parallelism: usize,
    cancel: &CancelToken,
    mut transform: F,
) -> Result<Vec<R>, MapError<E>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    let items: Vec<I::Item> = input.into_iter().collect();
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let parallelism = parallelism.max(1);
    let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(items.len()).collect();
    let mut pending = items.into_iter().enumerate();
    let group = CancelToken::new();
    let mut tasks = JoinSet::new();

    debug!(len = slots.len(), parallelism, "starting parallel map");

    let mut submit = |tasks: &mut JoinSet<(usize, Outcome<R, E>)>, index: usize, item: I::Item| {
        trace!(index, "submitting unit");
        let work = transform(item);
        let group = group.clone();
        let caller = cancel.clone();
        tasks.spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = group.cancelled() => Outcome::Cancelled,
                _ = caller.cancelled() => Outcome::Cancelled,
                result = work => Outcome::Done(result),
            };
            (index, outcome)
        });
    };

    for (index, item) in pending.by_ref().take(parallelism) {
        submit(&mut tasks, index, item);
    }

    while let Some(joined) = tasks.join_next().await {
        let (index, outcome) = match joined {
            Ok(done) => done,
            Err(err) => {
                group.cancel();
                tasks.abort_all();
                if err.is_panic() {
                    std::panic::resume_unwind(err.into_panic());
                }
                return Err(MapError::Cancelled);
            }
        };

        match outcome {
            Outcome::Done(Ok(value)) => slots[index] = Some(value),
            Outcome::Done(Err(err)) => {
                debug!(index, in_flight = tasks.len(), "unit failed, cancelling the rest");
                group.cancel();
                tasks.abort_all();
                return Err(MapError::Failed(err));
            }
            Outcome::Cancelled => {
                group.cancel();
                tasks.abort_all();
                return Err(MapError::Cancelled);
            }
        }

        if cancel.is_cancelled() {
            debug!(in_flight = tasks.len(), "parallel map cancelled");
            group.cancel();
            tasks.abort_all();
            return Err(MapError::Cancelled);
        }

        if let Some((index, item)) = pending.next() {
            submit(&mut tasks, index, item);
        }
    }

    debug_assert!(slots.iter().all(Option::is_some));
    Ok(slots.into_iter().flatten().collect())
}

/// [`parallel_map`] with [`DEFAULT_PARALLELISM`] and a token nobody cancels.
pub async fn parallel_map_default<I, F, Fut, R, E>(
    input: I,
    transform: F,
) -> Result<Vec<R>, MapError<E>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<R, E>> + Send + 'static,
    R: Send + 'static,
    E: Send + 'static,
{
    parallel_map(input, DEFAULT_PARALLELISM, &CancelToken::new(), transform).await
}
