use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::action::OptimisticState;

/// Slice shape the reducer layer is expected to keep per state key. The
/// middleware only ever reads `data`; the rest is reducer-owned metadata it
/// attaches to the actions it forwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Slice<D> {
    pub data: Option<D>,
    pub optimistic_state: Option<OptimisticState>,
    pub error: Option<String>,
}

/// Read boundary into the surrounding store: the `data` of one slice, by
/// state key. Absent keys resolve to `None`, never an error.
pub trait StateReader: Send {
    type Data;

    fn data(&self, state_key: &str) -> Option<Self::Data>;
}

impl<D> StateReader for HashMap<String, Slice<D>>
where
    D: Clone + Send,
{
    type Data = D;

    fn data(&self, state_key: &str) -> Option<D> {
        self.get(state_key).and_then(|slice| slice.data.clone())
    }
}

impl<S> StateReader for Arc<Mutex<S>>
where
    S: StateReader,
{
    type Data = S::Data;

    fn data(&self, state_key: &str) -> Option<Self::Data> {
        self.lock().unwrap().data(state_key)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn slices() -> HashMap<String, Slice<String>> {
        let mut slices = HashMap::new();
        slices.insert(
            "test".to_string(),
            Slice {
                data: Some("BAR".to_string()),
                ..Default::default()
            },
        );
        slices.insert("empty".to_string(), Slice::default());
        slices
    }

    #[test]
    fn test_reads_slice_data_by_key() {
        assert_eq!(slices().data("test"), Some("BAR".to_string()));
    }

    #[test]
    fn test_absent_key_or_data_reads_none() {
        assert_eq!(slices().data("missing"), None);
        assert_eq!(slices().data("empty"), None);
    }

    #[test]
    fn test_shared_reader_delegates_through_lock() {
        let shared = Arc::new(Mutex::new(slices()));
        assert_eq!(shared.data("test"), Some("BAR".to_string()));
    }
}
