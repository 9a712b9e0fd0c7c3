mod action;
mod dispatch;
mod error;
mod forwarder;
mod middleware;
mod mutation;
mod state_reader;

pub use action::Action;
pub use action::OptimisticState;
pub use dispatch::Dispatch;
pub use dispatch::OnError;
pub use dispatch::OnSuccess;
pub use dispatch::OptimisticAction;
pub use dispatch::SimulateFn;
pub use dispatch::Tentative;
pub use error::ConfigError;
pub use error::OperationError;
pub use forwarder::AnyForwarder;
pub use forwarder::ForwardFn;
pub use forwarder::Forwarder;
pub use middleware::Intercepted;
pub use middleware::OptimisticMiddleware;
pub use mutation::Completion;
pub use mutation::Mutation;
pub use state_reader::Slice;
pub use state_reader::StateReader;
