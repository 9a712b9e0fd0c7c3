use std::ops::Deref;

pub trait Forwarder: Send {
    type Action;

    fn forward(&self, action: Self::Action);
}

pub struct AnyForwarder<Action: Send + 'static> {
    value: Box<dyn Forwarder<Action = Action> + Sync>,
}

impl<Action: Send> AnyForwarder<Action> {
    pub fn new(value: Box<dyn Forwarder<Action = Action> + Sync>) -> Self {
        Self { value }
    }
}

impl<Action: Send> Forwarder for AnyForwarder<Action> {
    type Action = Action;
    fn forward(&self, action: Action) {
        self.value.forward(action)
    }
}

impl<T> Forwarder for std::sync::Arc<T>
where
    T: Forwarder + std::marker::Sync,
{
    type Action = T::Action;

    fn forward(&self, action: Self::Action) {
        self.deref().forward(action);
    }
}

/// Next stage built from a plain closure. Handy for wiring the middleware to
/// whatever dispatch surface the surrounding store exposes.
pub struct ForwardFn<Action, F>
where
    Action: Send,
    F: Fn(Action) + Send,
{
    forward: F,
    _phantom: std::marker::PhantomData<fn(Action)>,
}

impl<Action, F> ForwardFn<Action, F>
where
    Action: Send,
    F: Fn(Action) + Send,
{
    pub fn new(forward: F) -> Self {
        Self {
            forward,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<Action, F> Forwarder for ForwardFn<Action, F>
where
    Action: Send + 'static,
    F: Fn(Action) + Send + 'static,
{
    type Action = Action;

    fn forward(&self, action: Action) {
        (self.forward)(action)
    }
}
