use super::*;

/// Keeps a subscriber connected to a signal. Dropping it disconnects the subscriber, so
/// callbacks never outlive whoever registered them.
pub struct Subscription {
    signal: Weak<RefCell<SignalInner>>,
    key: SubscriberKey,
    is_detached: bool,
}

impl Subscription {
    pub(super) fn new(signal: Weak<RefCell<SignalInner>>, key: SubscriberKey) -> Self {
        Self {
            signal,
            key,
            is_detached: false,
        }
    }

    /// False once detached, or once the signal itself is gone
    pub fn is_connected(&self) -> bool {
        if self.is_detached {
            return false;
        }
        match self.signal.upgrade() {
            Some(signal) => {
                let inner = signal.borrow();
                inner.subscribers.contains_key(self.key)
            }
            None => false,
        }
    }

    /// Same as dropping, but reads better at call sites
    pub fn detach(mut self) {
        self.detach_inner();
    }

    /// Leave the subscriber connected for as long as the signal lives
    pub fn forget(mut self) {
        self.is_detached = true;
    }

    fn detach_inner(&mut self) {
        if self.is_detached {
            return;
        }
        self.is_detached = true;
        // The signal may have been dropped along with its store, which takes the subscriber with it
        if let Some(signal) = self.signal.upgrade() {
            signal
                .borrow_mut()
                .remove(self.key)
                .or_log_warn("failed to detach subscription");
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_inner();
    }
}
