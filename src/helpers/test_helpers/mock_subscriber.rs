use super::*;

/// Connects to all three signals of a store and records what it hears as "added name",
/// "changed name" and "removed name"
pub struct MockSubscriber {
    events: Rc<RefCell<Vec<String>>>,
    _subscriptions: Vec<Subscription>,
}

impl MockSubscriber {
    pub fn new(store: &PropertyStore) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let subscriptions = vec![
            store.property_added().connect(Self::recorder(&events, "added")),
            store.property_changed().connect(Self::recorder(&events, "changed")),
            store.property_removed().connect(Self::recorder(&events, "removed")),
        ];
        Self {
            events,
            _subscriptions: subscriptions,
        }
    }

    fn recorder(events: &Rc<RefCell<Vec<String>>>, kind: &'static str) -> impl PropertySubscriber {
        let events = events.clone();
        move |_: &PropertyStore, property: &str| {
            events.borrow_mut().push(format!("{} {}", kind, property))
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    /// Returns the events recorded so far and forgets them
    pub fn take_events(&self) -> Vec<String> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn event_count(&self) -> usize {
        self.events.borrow().len()
    }
}
