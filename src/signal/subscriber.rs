use super::*;

/// Something that wants to hear about a property being added, changed or removed. Any
/// `Fn(&PropertyStore, &str)` closure is a subscriber.
pub trait PropertySubscriber {
    fn notify(&self, store: &PropertyStore, property: &str);
}

impl<F> PropertySubscriber for F
where
    F: Fn(&PropertyStore, &str),
{
    fn notify(&self, store: &PropertyStore, property: &str) {
        self(store, property)
    }
}
