use std::sync::Arc;

use crate::action::Action;
use crate::action::OptimisticState;
use crate::dispatch::Dispatch;
use crate::dispatch::Tentative;
use crate::error::ConfigError;
use crate::forwarder::AnyForwarder;
use crate::forwarder::Forwarder;
use crate::mutation::Completion;
use crate::state_reader::StateReader;

/// Middleware that sits between a dispatcher and the reducer stage and turns
/// optimistic dispatches into the snapshot / tentative-apply / reconcile
/// sequence. Plain dispatches pass through untouched.
///
/// Reconciliation runs whenever the mutation invokes its completion, on
/// whatever thread that happens; the middleware itself never blocks and never
/// mutates state directly.
///
/// Concurrent optimistic dispatches against the same state key are not
/// serialized: the second snapshot captures the first dispatch's uncommitted
/// tentative value, and a late revert of the first stomps the second. Callers
/// that need same-key ordering must serialize upstream.
pub struct OptimisticMiddleware<S, D>
where
    S: StateReader<Data = D>,
    D: Clone + Send + 'static,
{
    reader: S,
    next: Arc<AnyForwarder<Action<D>>>,
}

/// What a dispatch call hands back to its caller.
#[derive(Debug)]
pub enum Intercepted<H> {
    /// The action was forwarded unchanged.
    Forwarded,
    /// An optimistic dispatch is awaiting reconciliation; carries whatever
    /// the mutation invocation returned.
    Pending(H),
}

impl<S, D> OptimisticMiddleware<S, D>
where
    S: StateReader<Data = D>,
    D: Clone + Send + 'static,
{
    pub fn new(reader: S, next: AnyForwarder<Action<D>>) -> Self {
        Self {
            reader,
            next: Arc::new(next),
        }
    }

    pub fn intercept<R, H>(
        &self,
        dispatch: Dispatch<D, R, H>,
    ) -> Result<Intercepted<H>, ConfigError>
    where
        R: Send + 'static,
    {
        let action = match dispatch {
            Dispatch::Plain(action) => {
                self.next.forward(action);
                return Ok(Intercepted::Forwarded);
            }
            Dispatch::Optimistic(action) => action,
        };

        let state_key = action.state_key.ok_or(ConfigError::MissingStateKey)?;
        if action.on_error.is_none() && matches!(action.tentative, Some(Tentative::Callback(_))) {
            return Err(ConfigError::MissingErrorHandler);
        }

        // The snapshot must predate the tentative apply below.
        let previous = self.reader.data(&state_key);

        match action.tentative {
            Some(Tentative::Callback(simulate)) => simulate(&self.next, action.data.clone()),
            Some(Tentative::Literal(tentative)) => self.next.forward(tentative),
            None => self.next.forward(Action {
                kind: action.kind.clone(),
                data: action.data.clone(),
                optimistic_state: Some(OptimisticState::Start),
                error: None,
            }),
        }

        log::debug!("Invoking mutation for state key {}", state_key);

        let next = self.next.clone();
        let kind = action.kind;
        let data = action.data;
        let error_kind = action.error_kind;
        let on_success = action.on_success;
        let on_error = action.on_error;
        let done: Completion<R> = Box::new(move |outcome| match outcome {
            Err(error) => {
                log::debug!("Mutation for state key {} failed: {}", state_key, error);
                match on_error {
                    Some(on_error) => on_error(&next, previous, error),
                    None => next.forward(Action {
                        kind: error_kind.unwrap_or(kind),
                        data: previous,
                        optimistic_state: Some(OptimisticState::Failure),
                        error: Some(error.reason),
                    }),
                }
            }
            Ok(result) => {
                log::debug!("Mutation for state key {} succeeded", state_key);
                match on_success {
                    Some(on_success) => on_success(&next, result),
                    None => next.forward(Action {
                        kind,
                        data,
                        optimistic_state: Some(OptimisticState::Success),
                        error: None,
                    }),
                }
            }
        });

        Ok(Intercepted::Pending(action.mutation.invoke(done)))
    }
}
