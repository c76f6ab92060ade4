use crate::status::Code;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The Alias for serde_json::Value, the type of values carried by a [`Context`].
pub type ContextValue = serde_json::Value;

/// Execution context threaded through every interaction.
///
/// Interactors and chains pass it along untouched; only leaf logic (or a middleware
/// that chooses to) looks at deadlines, cancellation or values.
///
/// Derived contexts share the cancellation flag of their parent.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: Arc<HashMap<String, ContextValue>>,
    deadline: Option<Instant>,
    canceled: Arc<AtomicBool>,
}

impl Context {
    /// An empty context: no values, no deadline, never canceled unless told so.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derives a context carrying an additional value.
    pub fn with_value(&self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        let mut values = HashMap::clone(&self.values);
        values.insert(key.into(), value.into());
        Self {
            values: Arc::new(values),
            ..self.clone()
        }
    }

    pub fn value(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    /// Derives a context with a deadline; an earlier parent deadline wins.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        };
        Self {
            deadline: Some(deadline),
            ..self.clone()
        }
    }

    /// Derives a context that expires after `timeout`. A timeout too large to be
    /// represented adds no deadline.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self.clone(),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancels this context and every context derived from it.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Release);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Acquire)
    }

    /// Why the context is done, if it is.
    pub fn err(&self) -> Option<Code> {
        if self.is_canceled() {
            return Some(Code::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(Code::DeadlineExceeded),
            _ => None,
        }
    }
}
