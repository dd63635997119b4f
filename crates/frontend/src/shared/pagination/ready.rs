//! Combined readiness of several paginated sections on one page

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateStatus {
    /// No registered section is still waiting for its first data
    pub ready: bool,
    pub pending: usize,
    pub error: bool,
    pub error_message: Option<String>,
}

/// Counts sections that have not shown data yet
///
/// Each section calls [`register_child`](Self::register_child) once when it is
/// created and [`child_ready`](Self::child_ready) once when its first data
/// arrives. The last error of any section is mirrored here as well.
#[derive(Default)]
pub struct ReadyAggregator {
    pending: Cell<usize>,
    error_message: RefCell<Option<String>>,
    listeners: RefCell<Vec<Box<dyn Fn(&AggregateStatus)>>>,
}

impl ReadyAggregator {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn register_child(&self) {
        self.pending.set(self.pending.get() + 1);
        self.notify();
    }

    pub fn child_ready(&self) {
        match self.pending.get().checked_sub(1) {
            Some(pending) => self.pending.set(pending),
            None => log::warn!("child_ready() without a registered section"),
        }
        self.notify();
    }

    pub fn is_all_ready(&self) -> bool {
        self.pending.get() == 0
    }

    pub fn pending(&self) -> usize {
        self.pending.get()
    }

    pub fn set_error(&self, message: impl Into<String>) {
        *self.error_message.borrow_mut() = Some(message.into());
        self.notify();
    }

    pub fn clear_error(&self) {
        let had_error = self.error_message.borrow_mut().take().is_some();
        if had_error {
            self.notify();
        }
    }

    pub fn status(&self) -> AggregateStatus {
        let error_message = self.error_message.borrow().clone();
        AggregateStatus {
            ready: self.is_all_ready(),
            pending: self.pending.get(),
            error: error_message.is_some(),
            error_message,
        }
    }

    /// Listeners must not call back into the aggregator
    pub fn subscribe(&self, listener: impl Fn(&AggregateStatus) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn notify(&self) {
        let status = self.status();
        for listener in self.listeners.borrow().iter() {
            listener(&status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_when_all_children_reported() {
        let aggregator = ReadyAggregator::new();
        assert!(aggregator.is_all_ready());

        aggregator.register_child();
        aggregator.register_child();
        assert!(!aggregator.is_all_ready());
        assert_eq!(aggregator.pending(), 2);

        aggregator.child_ready();
        assert!(!aggregator.is_all_ready());
        aggregator.child_ready();
        assert!(aggregator.is_all_ready());
    }

    #[test]
    fn test_extra_child_ready_does_not_underflow() {
        let aggregator = ReadyAggregator::new();
        aggregator.child_ready();
        assert_eq!(aggregator.pending(), 0);
    }

    #[test]
    fn test_listeners_see_every_change() {
        let aggregator = ReadyAggregator::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        aggregator.subscribe(move |status| sink.borrow_mut().push(status.clone()));

        aggregator.register_child();
        aggregator.set_error("boom");
        aggregator.clear_error();
        aggregator.child_ready();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert!(!seen[0].ready);
        assert!(seen[1].error);
        assert_eq!(seen[1].error_message.as_deref(), Some("boom"));
        assert!(!seen[2].error);
        assert!(seen[3].ready);
    }
}
