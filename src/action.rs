use std::fmt::Display;

/// Reconciliation tag attached to actions the middleware forwards. The
/// reducer layer stores it on the affected slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimisticState {
    Start,
    Success,
    Failure,
}

impl OptimisticState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimisticState::Start => "OPTIMISTIC_UPDATE_START",
            OptimisticState::Success => "OPTIMISTIC_UPDATE_SUCCESS",
            OptimisticState::Failure => "OPTIMISTIC_UPDATE_FAILURE",
        }
    }
}

impl Display for OptimisticState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action shape the middleware forwards downstream. `kind` plays the role of
/// the classic `type` field; the payload type is caller-chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct Action<D> {
    pub kind: String,
    pub data: Option<D>,
    pub optimistic_state: Option<OptimisticState>,
    pub error: Option<String>,
}

impl<D> Action<D> {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: None,
            optimistic_state: None,
            error: None,
        }
    }

    pub fn with_data(mut self, data: D) -> Self {
        self.data = Some(data);
        self
    }
}
