use super::*;

/// Object-safe face of a PropertyType. Implemented for every PropertyType, never by hand.
trait ErasedValue: Debug {
    fn as_any(&self) -> &dyn Any;
    fn clone_boxed(&self) -> Box<dyn ErasedValue>;
    fn equals(&self, other: &dyn ErasedValue) -> bool;
    fn name_fragment(&self) -> Option<String>;
}

impl<T: PropertyType> ErasedValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ErasedValue> {
        Box::new(self.clone())
    }

    fn equals(&self, other: &dyn ErasedValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn name_fragment(&self) -> Option<String> {
        PropertyType::name_fragment(self)
    }
}

/// A single stored value of any PropertyType. The concrete type is fixed when the holder is
/// created and is checked on every typed access.
pub struct PropertyValue {
    inner: Box<dyn ErasedValue>,
    type_name: &'static str,
}

impl PropertyValue {
    pub fn new<T: PropertyType>(value: T) -> Self {
        Self {
            inner: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.inner.as_any().type_id()
    }

    /// Full type name of the held value, as given by std::any::type_name()
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }

    /// None if the held value is not a T
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    /// Same type and equal value
    pub fn holds<T: PropertyType>(&self, value: &T) -> bool {
        self.downcast_ref::<T>() == Some(value)
    }

    pub fn name_fragment(&self) -> Option<String> {
        self.inner.name_fragment()
    }
}

impl Clone for PropertyValue {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_boxed(),
            type_name: self.type_name,
        }
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        self.inner.equals(&*other.inner)
    }
}

impl Debug for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}
