use std::fmt::Debug;
use std::future::Future;

use tokio::task::JoinHandle;

use crate::error::OperationError;

/// Completion callback handed to a mutation. `Ok` settles the dispatch as
/// confirmed (the result is optional), `Err` as reverted.
pub type Completion<R> = Box<dyn FnOnce(Result<Option<R>, OperationError>) + Send>;

/// The side-effecting operation behind an optimistic dispatch. It receives
/// exactly one completion callback and returns whatever handle its transport
/// hands back; scheduling is entirely up to the caller. Invoking the
/// completion synchronously is allowed.
pub struct Mutation<R, H> {
    run: Box<dyn FnOnce(Completion<R>) -> H + Send>,
}

impl<R, H> Mutation<R, H>
where
    R: Send + 'static,
{
    pub fn new<T>(run: T) -> Self
    where
        T: FnOnce(Completion<R>) -> H + Send + 'static,
    {
        Self { run: Box::new(run) }
    }

    pub(crate) fn invoke(self, done: Completion<R>) -> H {
        (self.run)(done)
    }
}

impl<R> Mutation<R, JoinHandle<()>>
where
    R: Send + 'static,
{
    /// Bridges a future-shaped operation onto the callback contract. The
    /// future runs on a spawned task and its output settles the dispatch;
    /// the task handle becomes the pending handle the dispatch returns.
    pub fn from_future<Fut>(job: Fut) -> Self
    where
        Fut: Future<Output = Result<Option<R>, OperationError>> + Send + 'static,
    {
        Mutation::new(move |done: Completion<R>| tokio::spawn(async move { done(job.await) }))
    }
}

impl<R, H> Debug for Mutation<R, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Mutation")
    }
}
