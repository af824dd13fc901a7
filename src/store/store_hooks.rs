use super::*;

/// Lets a specialised store change how removal and bulk copy behave, without wrapping every
/// store operation. Clones share their source's hooks.
pub trait StoreHooks {
    /// Whether copy_from() brings the entry with this formatted name into the store. Clones
    /// always take every entry.
    fn accept_copy(&self, _formatted_name: &str) -> bool {
        true
    }

    /// Runs after unset() or clear() removed a property and its removal signal fired
    fn after_unset(&self, _store: &PropertyStore, _formatted_name: &str) {}
}
