use super::*;

/// Shared handle to a store. Scene components keep stores alive through these.
pub type StoreRef = Rc<PropertyStore>;

/// A runtime-typed mapping from property names to values, which announces every structural
/// change and every change of value through its three signals.
///
/// All operations take `&self` and signals fire synchronously, after the change has been
/// committed, so subscribers are free to read or modify the store from their callbacks.
/// Borrows handed out by `get_pointer()`, `with()` and `values()` must be released before the
/// store is modified again, or the modification panics.
#[derive(derivative::Derivative)]
#[derivative(Debug)]
pub struct PropertyStore {
    key: String,
    uuid: Uuid,
    values: RefCell<HashMap<String, PropertyValue>>,
    /// Formatted name -> the name the caller last used for it
    #[derivative(Debug = "ignore")]
    aliases: RefCell<HashMap<String, String>>,
    #[derivative(Debug = "ignore")]
    property_added: Signal,
    #[derivative(Debug = "ignore")]
    property_changed: Signal,
    #[derivative(Debug = "ignore")]
    property_removed: Signal,
    config: StoreConfig,
    #[derivative(Debug = "ignore")]
    hooks: Option<Rc<dyn StoreHooks>>,
    #[derivative(Debug = "ignore")]
    self_ref: Weak<PropertyStore>,
}

impl PropertyStore {
    pub fn create(key: &str) -> StoreRef {
        Self::create_with_config(key, StoreConfig::default())
    }

    pub fn create_with_config(key: &str, config: StoreConfig) -> StoreRef {
        Self::build(key, config, None)
    }

    pub fn create_with_hooks(key: &str, config: StoreConfig, hooks: Rc<dyn StoreHooks>) -> StoreRef {
        Self::build(key, config, Some(hooks))
    }

    /// New store with the same key, config and hooks as source and a copy of all its values.
    /// It gets its own uuid and its own (empty) signals. The hooks' copy filter is not
    /// consulted, so the new store holds everything the source does.
    pub fn create_from(source: &PropertyStore) -> StoreRef {
        let store = Self::build(&source.key, source.config.clone(), source.hooks.clone());
        debug!("property store {} copied from {}", store.uuid, source.uuid);
        store.copy_entries(source, false);
        store
    }

    fn build(key: &str, config: StoreConfig, hooks: Option<Rc<dyn StoreHooks>>) -> StoreRef {
        let store = Rc::new_cyclic(|self_ref| Self {
            key: key.to_string(),
            uuid: Uuid::new_v4(),
            values: RefCell::new(HashMap::new()),
            aliases: RefCell::new(HashMap::new()),
            property_added: Signal::new("property_added", config.trace_signals),
            property_changed: Signal::new("property_changed", config.trace_signals),
            property_removed: Signal::new("property_removed", config.trace_signals),
            config,
            hooks,
            self_ref: self_ref.clone(),
        });
        debug!("created property store {:?} ({})", store.key, store.uuid);
        store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// A new shared handle to this store, for subscribers that need to keep it alive. None
    /// only while the store is being dropped.
    pub fn handle(&self) -> Option<StoreRef> {
        self.self_ref.upgrade()
    }

    pub fn property_added(&self) -> &Signal {
        &self.property_added
    }

    pub fn property_changed(&self) -> &Signal {
        &self.property_changed
    }

    pub fn property_removed(&self) -> &Signal {
        &self.property_removed
    }

    /// Read-only view of every stored value, keyed by formatted name
    pub fn values(&self) -> Ref<HashMap<String, PropertyValue>> {
        self.values.borrow()
    }

    /// Formatted names of every property, sorted
    pub fn property_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.values.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    /// The storage key for a property name. `[@reference]` markers are replaced with the
    /// current value of the property they name, so `lights[@active].color` is stored as
    /// `lights[2].color` while `active` holds 2.
    pub fn format_property_name(&self, name: &str) -> StoreResult<String> {
        match self.config.name_formatting {
            NameFormatting::Literal => Ok(name.to_string()),
            NameFormatting::Indirect => self.format_nested(name, 0),
        }
    }

    fn format_nested(&self, name: &str, depth: usize) -> StoreResult<String> {
        if !name::has_references(name) {
            return Ok(name.to_string());
        }
        let segments = parse_property_name(name)?;
        name::resolve_segments(&segments, |reference| {
            if depth >= self.config.max_indirection_depth {
                return Err(StoreError::InvalidArgument(format!(
                    "property references in {:?} nest deeper than {}",
                    name, self.config.max_indirection_depth
                )));
            }
            let referenced = self.format_nested(reference, depth + 1)?;
            self.name_fragment(&referenced)
        })
    }

    /// The value of a property, spelled for use inside another property's name
    fn name_fragment(&self, formatted: &str) -> StoreResult<String> {
        let values = self.values.borrow();
        let value = values
            .get(formatted)
            .ok_or_else(|| StoreError::OutOfRange(formatted.to_string()))?;
        value.name_fragment().ok_or_else(|| {
            StoreError::InvalidArgument(format!(
                "property {:?} holds {}, which can not be used in a property name",
                formatted,
                shorten_type_name(value.type_name())
            ))
        })
    }

    /// Best-effort inverse of format_property_name(): the name last used to write the
    /// property, or the formatted name if there is no record of one
    pub fn unformat_property_name(&self, formatted: &str) -> String {
        self.aliases
            .borrow()
            .get(formatted)
            .cloned()
            .unwrap_or_else(|| formatted.to_string())
    }

    fn storage_name(&self, name: &str, skip_formatting: bool) -> StoreResult<String> {
        if skip_formatting {
            Ok(name.to_string())
        } else {
            self.format_property_name(name)
        }
    }

    fn remember_alias(&self, name: &str, formatted: &str) {
        let mut aliases = self.aliases.borrow_mut();
        if name == formatted {
            aliases.remove(formatted);
        } else {
            aliases.insert(formatted.to_string(), name.to_string());
        }
    }

    pub fn has_property(&self, name: &str, skip_formatting: bool) -> bool {
        match self.storage_name(name, skip_formatting) {
            Ok(formatted) => self.values.borrow().contains_key(&formatted),
            Err(_) => false,
        }
    }

    /// Errors with InvalidArgument if there is no such property
    pub fn property_has_type<T: 'static>(&self, name: &str, skip_formatting: bool) -> StoreResult<bool> {
        let formatted = self.storage_name(name, skip_formatting)?;
        let values = self.values.borrow();
        match values.get(&formatted) {
            Some(value) => Ok(value.is::<T>()),
            None => Err(StoreError::InvalidArgument(format!(
                "no property {:?} to check the type of",
                formatted
            ))),
        }
    }

    /// A copy of the stored value
    pub fn get<T: PropertyType>(&self, name: &str, skip_formatting: bool) -> StoreResult<T> {
        self.with::<T, T, _>(name, skip_formatting, T::clone)
    }

    /// Borrow of the stored value. Modifying the store while it's held panics.
    pub fn get_pointer<T: 'static>(&self, name: &str, skip_formatting: bool) -> StoreResult<Ref<T>> {
        let formatted = self.storage_name(name, skip_formatting)?;
        Ref::filter_map(self.values.borrow(), |values| {
            values.get(&formatted).and_then(|value| value.downcast_ref::<T>())
        })
        .map_err(|values| match values.get(&formatted) {
            Some(value) => StoreError::type_mismatch::<T>(&formatted, value),
            None => StoreError::OutOfRange(formatted.clone()),
        })
    }

    /// Runs f on a borrow of the stored value. f must not modify the store.
    pub fn with<T, R, F>(&self, name: &str, skip_formatting: bool, f: F) -> StoreResult<R>
    where
        T: 'static,
        F: FnOnce(&T) -> R,
    {
        let value = self.get_pointer::<T>(name, skip_formatting)?;
        Ok(f(&*value))
    }

    /// Stores a value. A new property fires property_added then property_changed, a changed
    /// value (or type) fires property_changed, and writing the value already there fires
    /// nothing.
    pub fn set<T: PropertyType>(&self, name: &str, value: T, skip_formatting: bool) -> StoreResult<&Self> {
        let formatted = self.storage_name(name, skip_formatting)?;
        let added = {
            let mut values = self.values.borrow_mut();
            match values.entry(formatted.clone()) {
                Entry::Occupied(mut entry) => {
                    if entry.get().holds(&value) {
                        return Ok(self);
                    }
                    entry.insert(PropertyValue::new(value));
                    false
                }
                Entry::Vacant(entry) => {
                    entry.insert(PropertyValue::new(value));
                    true
                }
            }
        };
        self.remember_alias(name, &formatted);
        if added {
            self.property_added.fire(self, name);
        }
        self.property_changed.fire(self, name);
        Ok(self)
    }

    /// Removes a property and fires property_removed. Unsetting a missing property does
    /// nothing.
    pub fn unset(&self, name: &str, skip_formatting: bool) -> StoreResult<&Self> {
        let formatted = self.storage_name(name, skip_formatting)?;
        let removed = self.values.borrow_mut().remove(&formatted);
        if removed.is_some() {
            self.aliases.borrow_mut().remove(&formatted);
            self.property_removed.fire(self, name);
            if let Some(hooks) = &self.hooks {
                hooks.after_unset(self, &formatted);
            }
        }
        Ok(self)
    }

    /// Exchanges the values (and types) of two properties and fires property_changed for
    /// both, even if the values were equal. Both must exist.
    pub fn swap(&self, name1: &str, name2: &str, skip_formatting: bool) -> StoreResult<&Self> {
        let formatted1 = self.storage_name(name1, skip_formatting)?;
        let formatted2 = self.storage_name(name2, skip_formatting)?;
        {
            let mut values = self.values.borrow_mut();
            for formatted in &[&formatted1, &formatted2] {
                if !values.contains_key(*formatted) {
                    return Err(StoreError::OutOfRange(formatted.to_string()));
                }
            }
            if formatted1 != formatted2 {
                if let Some(first) = values.remove(&formatted1) {
                    if let Some(slot) = values.get_mut(&formatted2) {
                        let second = std::mem::replace(slot, first);
                        values.insert(formatted1.clone(), second);
                    }
                }
            }
        }
        self.property_changed.fire(self, name1);
        self.property_changed.fire(self, name2);
        Ok(self)
    }

    /// Removes every property, firing property_removed for each (in name order) once they
    /// are all gone
    pub fn clear(&self) -> &Self {
        let mut removed: Vec<String> = self.values.borrow_mut().drain().map(|(k, _)| k).collect();
        removed.sort();
        for formatted in removed {
            let name = self.aliases.borrow_mut().remove(&formatted);
            self.property_removed
                .fire(self, name.as_deref().unwrap_or(&formatted));
            if let Some(hooks) = &self.hooks {
                hooks.after_unset(self, &formatted);
            }
        }
        self
    }

    /// Writes every property of source that this store's hooks accept into this store, with
    /// the same signals set() would fire. Properties only this store has are left alone. The
    /// source is read in full before anything is written, so the copy is never partial.
    pub fn copy_from(&self, source: &PropertyStore) -> &Self {
        self.copy_entries(source, true)
    }

    fn copy_entries(&self, source: &PropertyStore, filtered: bool) -> &Self {
        let mut entries: Vec<(String, Option<String>, PropertyValue)> = {
            let values = source.values.borrow();
            let aliases = source.aliases.borrow();
            values
                .iter()
                .filter(|(formatted, _)| !filtered || self.accepts_copy(formatted))
                .map(|(formatted, value)| {
                    (
                        formatted.clone(),
                        aliases.get(formatted).cloned(),
                        value.clone(),
                    )
                })
                .collect()
        };
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (formatted, alias, value) in entries {
            let added = {
                let mut values = self.values.borrow_mut();
                match values.entry(formatted.clone()) {
                    Entry::Occupied(mut entry) => {
                        if *entry.get() == value {
                            continue;
                        }
                        entry.insert(value);
                        false
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(value);
                        true
                    }
                }
            };
            let name = alias.unwrap_or_else(|| formatted.clone());
            self.remember_alias(&name, &formatted);
            if added {
                self.property_added.fire(self, &name);
            }
            self.property_changed.fire(self, &name);
        }
        self
    }

    fn accepts_copy(&self, formatted: &str) -> bool {
        self.hooks
            .as_ref()
            .map_or(true, |hooks| hooks.accept_copy(formatted))
    }

    /// A new store with its own identity and signals, holding a copy of this one's values
    pub fn clone_store(&self) -> StoreRef {
        Self::create_from(self)
    }
}
