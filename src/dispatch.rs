use std::fmt::Debug;

use crate::action::Action;
use crate::error::OperationError;
use crate::forwarder::AnyForwarder;
use crate::mutation::Mutation;

pub type SimulateFn<D> = Box<dyn FnOnce(&AnyForwarder<Action<D>>, Option<D>) + Send>;
pub type OnSuccess<D, R> = Box<dyn FnOnce(&AnyForwarder<Action<D>>, Option<R>) + Send>;
pub type OnError<D> =
    Box<dyn FnOnce(&AnyForwarder<Action<D>>, Option<D>, OperationError) + Send>;

/// How the tentative update is produced. Selected explicitly by the caller;
/// leaving it off the envelope falls back to the synthesized start action.
pub enum Tentative<D: Send + 'static> {
    /// Forward this action as-is.
    Literal(Action<D>),
    /// Run caller logic, invoked with the forwarder and the envelope's data.
    /// It may forward any number of actions, so it owns the revert shape too:
    /// the middleware refuses it without an `on_error` handler.
    Callback(SimulateFn<D>),
}

impl<D: Send + 'static> Tentative<D> {
    pub fn literal(action: Action<D>) -> Self {
        Tentative::Literal(action)
    }

    pub fn callback<T>(simulate: T) -> Self
    where
        T: FnOnce(&AnyForwarder<Action<D>>, Option<D>) + Send + 'static,
    {
        Tentative::Callback(Box::new(simulate))
    }
}

/// Everything one optimistic dispatch carries: the payload the tentative and
/// confirmation actions are built from, the slice to snapshot, the mutation,
/// and the optional reconciliation overrides.
pub struct OptimisticAction<D: Send + 'static, R, H> {
    pub kind: String,
    pub data: Option<D>,
    pub state_key: Option<String>,
    pub error_kind: Option<String>,
    pub tentative: Option<Tentative<D>>,
    pub mutation: Mutation<R, H>,
    pub on_success: Option<OnSuccess<D, R>>,
    pub on_error: Option<OnError<D>>,
}

impl<D: Send + 'static, R, H> OptimisticAction<D, R, H> {
    pub fn new(kind: impl Into<String>, mutation: Mutation<R, H>) -> Self {
        Self {
            kind: kind.into(),
            data: None,
            state_key: None,
            error_kind: None,
            tentative: None,
            mutation,
            on_success: None,
            on_error: None,
        }
    }

    pub fn with_state_key(mut self, state_key: impl Into<String>) -> Self {
        self.state_key = Some(state_key.into());
        self
    }

    pub fn with_data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }

    /// Kind used on the synthesized revert action instead of `kind`.
    pub fn with_error_kind(mut self, error_kind: impl Into<String>) -> Self {
        self.error_kind = Some(error_kind.into());
        self
    }

    pub fn with_tentative(mut self, tentative: Tentative<D>) -> Self {
        self.tentative = Some(tentative);
        self
    }

    pub fn with_on_success<T>(mut self, on_success: T) -> Self
    where
        T: FnOnce(&AnyForwarder<Action<D>>, Option<R>) + Send + 'static,
    {
        self.on_success = Some(Box::new(on_success));
        self
    }

    pub fn with_on_error<T>(mut self, on_error: T) -> Self
    where
        T: FnOnce(&AnyForwarder<Action<D>>, Option<D>, OperationError) + Send + 'static,
    {
        self.on_error = Some(Box::new(on_error));
        self
    }
}

/// What the middleware is fed. The variant is the one and only discriminator
/// for optimistic handling; nothing is inferred from field shapes.
pub enum Dispatch<D: Send + 'static, R, H> {
    Plain(Action<D>),
    Optimistic(OptimisticAction<D, R, H>),
}

impl<D: Send + 'static, R, H> From<Action<D>> for Dispatch<D, R, H> {
    fn from(action: Action<D>) -> Self {
        Dispatch::Plain(action)
    }
}

impl<D: Send + 'static, R, H> From<OptimisticAction<D, R, H>> for Dispatch<D, R, H> {
    fn from(action: OptimisticAction<D, R, H>) -> Self {
        Dispatch::Optimistic(action)
    }
}

impl<D: Send + Debug + 'static> Debug for Tentative<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(action) => f.write_str(&format!("Literal {:#?}", action)),
            Self::Callback(_) => f.write_str("Callback"),
        }
    }
}

impl<D: Send + Debug + 'static, R, H> Debug for OptimisticAction<D, R, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptimisticAction")
            .field("kind", &self.kind)
            .field("data", &self.data)
            .field("state_key", &self.state_key)
            .field("error_kind", &self.error_kind)
            .field("tentative", &self.tentative)
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

impl<D: Send + Debug + 'static, R, H> Debug for Dispatch<D, R, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain(action) => f.write_str(&format!("Plain {:#?}", action)),
            Self::Optimistic(action) => f.write_str(&format!("Optimistic {:#?}", action)),
        }
    }
}
