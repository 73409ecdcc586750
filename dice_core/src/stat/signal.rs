//! Signal - explicit observer registration for stat change events

/// Handle returned by [`Signal::subscribe`]; pass it back to
/// [`Signal::unsubscribe`] to detach the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

/// A list of zero-argument observers, delivered synchronously in
/// subscription order. Token-based so unsubscription is explicit and
/// testable, instead of relying on closure identity.
#[derive(Default)]
pub struct Signal {
    next_token: u64,
    observers: Vec<(SubscriptionToken, Box<dyn FnMut()>)>,
}

impl Signal {
    pub fn new() -> Self {
        Signal::default()
    }

    pub fn subscribe(&mut self, observer: impl FnMut() + 'static) -> SubscriptionToken {
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;
        self.observers.push((token, Box::new(observer)));
        token
    }

    /// Detach an observer. Unknown tokens are a no-op.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) {
        self.observers.retain(|(t, _)| *t != token);
    }

    pub fn notify(&mut self) {
        for (_, observer) in &mut self.observers {
            observer();
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl std::fmt::Debug for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_notify_reaches_all_observers() {
        let hits = Rc::new(Cell::new(0));
        let mut signal = Signal::new();
        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            signal.subscribe(move || hits.set(hits.get() + 1));
        }
        signal.notify();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_unsubscribe_detaches() {
        let hits = Rc::new(Cell::new(0));
        let mut signal = Signal::new();
        let hits_clone = Rc::clone(&hits);
        let token = signal.subscribe(move || hits_clone.set(hits_clone.get() + 1));

        signal.notify();
        signal.unsubscribe(token);
        signal.notify();

        assert_eq!(hits.get(), 1);
        assert_eq!(signal.observer_count(), 0);
    }

    #[test]
    fn test_unsubscribe_unknown_token_is_noop() {
        let mut signal = Signal::new();
        let token = signal.subscribe(|| {});
        signal.unsubscribe(token);
        signal.unsubscribe(token);
        assert_eq!(signal.observer_count(), 0);
    }
}
