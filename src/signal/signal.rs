use super::*;
use slotmap::SlotMap;

pub struct SignalInner {
    pub subscribers: SlotMap<SubscriberKey, Rc<dyn PropertySubscriber>>,
    /// Keys in registration order. Slotmap iteration order is by slot, which gets reused.
    pub order: Vec<SubscriberKey>,
}

impl SignalInner {
    pub fn remove(&mut self, key: SubscriberKey) -> Result<(), String> {
        match self.subscribers.remove(key) {
            Some(_) => {
                self.order.retain(|k| *k != key);
                Ok(())
            }
            None => Err("subscriber was already detached".into()),
        }
    }
}

/// A broadcast point with zero or more subscribers. Firing calls every subscriber in the order
/// they connected, on the calling thread, before returning.
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct Signal {
    name: &'static str,
    trace: bool,
    #[derivative(Debug = "ignore")]
    inner: Rc<RefCell<SignalInner>>,
}

impl Signal {
    /// name is only used for logging. If trace is true every dispatch is logged.
    pub fn new(name: &'static str, trace: bool) -> Self {
        Self {
            name,
            trace,
            inner: Rc::new(RefCell::new(SignalInner {
                subscribers: SlotMap::with_key(),
                order: Vec::new(),
            })),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The subscriber stays connected until the returned Subscription is dropped or detached
    #[must_use = "dropping the subscription disconnects the subscriber immediately"]
    pub fn connect<S>(&self, subscriber: S) -> Subscription
    where
        S: PropertySubscriber + 'static,
    {
        self.connect_rc(Rc::new(subscriber))
    }

    /// Like connect(), for a subscriber that is shared with other owners
    #[must_use = "dropping the subscription disconnects the subscriber immediately"]
    pub fn connect_rc(&self, subscriber: Rc<dyn PropertySubscriber>) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let key = inner.subscribers.insert(subscriber);
        inner.order.push(key);
        Subscription::new(Rc::downgrade(&self.inner), key)
    }

    /// Notifies everyone connected at the time of the call. Subscribers connected or detached
    /// by a subscriber during dispatch only see the difference from the next fire().
    pub fn fire(&self, store: &PropertyStore, property: &str) {
        let subscribers: Vec<Rc<dyn PropertySubscriber>> = {
            let inner = self.inner.borrow();
            inner
                .order
                .iter()
                .filter_map(|key| inner.subscribers.get(*key).cloned())
                .collect()
        };
        if self.trace {
            trace!(
                "{} {:?} on {:?} ({}), {} subscriber(s)",
                self.name,
                property,
                store.key(),
                store.uuid(),
                subscribers.len()
            );
        }
        for subscriber in subscribers {
            subscriber.notify(store, property);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (StoreRef, Signal, Rc<RefCell<Vec<String>>>) {
        (
            PropertyStore::create("test"),
            Signal::new("test_signal", true),
            Rc::new(RefCell::new(Vec::new())),
        )
    }

    fn recorder(log: &Rc<RefCell<Vec<String>>>, tag: &'static str) -> impl PropertySubscriber {
        let log = log.clone();
        move |_: &PropertyStore, property: &str| log.borrow_mut().push(format!("{} {}", tag, property))
    }

    #[test]
    fn can_fire_without_subscribers() {
        let (store, signal, _) = setup();
        signal.fire(&store, "x");
    }

    #[test]
    fn subscriber_gets_store_and_property() {
        let (store, signal, log) = setup();
        let uuid = store.uuid();
        let seen = log.clone();
        let _sub = signal.connect(move |store: &PropertyStore, property: &str| {
            assert_eq!(store.uuid(), uuid);
            seen.borrow_mut().push(property.to_string());
        });
        signal.fire(&store, "color");
        assert_eq!(*log.borrow(), ["color"]);
    }

    #[test]
    fn subscribers_are_called_in_registration_order() {
        let (store, signal, log) = setup();
        let _a = signal.connect(recorder(&log, "a"));
        let _b = signal.connect(recorder(&log, "b"));
        let _c = signal.connect(recorder(&log, "c"));
        signal.fire(&store, "x");
        assert_eq!(*log.borrow(), ["a x", "b x", "c x"]);
    }

    #[test]
    fn order_survives_slot_reuse() {
        let (store, signal, log) = setup();
        let a = signal.connect(recorder(&log, "a"));
        let _b = signal.connect(recorder(&log, "b"));
        drop(a);
        let _c = signal.connect(recorder(&log, "c"));
        signal.fire(&store, "x");
        assert_eq!(*log.borrow(), ["b x", "c x"]);
    }

    #[test]
    fn dropping_subscription_disconnects() {
        let (store, signal, log) = setup();
        let sub = signal.connect(recorder(&log, "a"));
        assert_eq!(signal.len(), 1);
        drop(sub);
        assert!(signal.is_empty());
        signal.fire(&store, "x");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn forgotten_subscription_stays_connected() {
        let (store, signal, log) = setup();
        signal.connect(recorder(&log, "a")).forget();
        signal.fire(&store, "x");
        signal.fire(&store, "y");
        assert_eq!(*log.borrow(), ["a x", "a y"]);
    }

    #[test]
    fn shared_subscriber_can_connect_twice() {
        let (store, signal, log) = setup();
        let subscriber: Rc<dyn PropertySubscriber> = Rc::new(recorder(&log, "a"));
        let _first = signal.connect_rc(subscriber.clone());
        let _second = signal.connect_rc(subscriber);
        signal.fire(&store, "x");
        assert_eq!(*log.borrow(), ["a x", "a x"]);
    }

    #[test]
    fn subscriber_connected_during_dispatch_waits_for_next_fire() {
        let (store, signal, log) = setup();
        let signal = Rc::new(signal);
        let late = Rc::new(RefCell::new(None));
        let _sub = {
            let signal_handle = signal.clone();
            let late = late.clone();
            let log = log.clone();
            signal.connect(move |_: &PropertyStore, _: &str| {
                if late.borrow().is_none() {
                    *late.borrow_mut() = Some(signal_handle.connect(recorder(&log, "late")));
                }
            })
        };
        signal.fire(&store, "x");
        assert!(log.borrow().is_empty());
        signal.fire(&store, "y");
        assert_eq!(*log.borrow(), ["late y"]);
    }
}
