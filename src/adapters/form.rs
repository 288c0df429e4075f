use crate::core::FormSource;
use crate::domain::model::FieldIds;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Form backed by a fixed set of values, keyed by element id.
#[derive(Debug)]
pub struct StaticForm {
    values: HashMap<String, String>,
    submit_enabled: AtomicBool,
}

impl StaticForm {
    pub fn empty() -> Self {
        Self {
            values: HashMap::new(),
            submit_enabled: AtomicBool::new(true),
        }
    }

    /// Form populated under the default field ids.
    pub fn new(goal: &str, learning_style: &str, daily_time: &str) -> Self {
        Self::with_ids(&FieldIds::default(), goal, learning_style, daily_time)
    }

    pub fn with_ids(ids: &FieldIds, goal: &str, learning_style: &str, daily_time: &str) -> Self {
        Self::empty()
            .with_value(&ids.goal, goal)
            .with_value(&ids.learning_style, learning_style)
            .with_value(&ids.daily_time, daily_time)
    }

    pub fn with_value(mut self, id: &str, value: &str) -> Self {
        self.values.insert(id.to_string(), value.to_string());
        self
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled.load(Ordering::Acquire)
    }
}

impl FormSource for StaticForm {
    fn value(&self, id: &str) -> Option<String> {
        self.values.get(id).cloned()
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.store(enabled, Ordering::Release);
    }
}
