use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The (formatted) property name is not in the store
    OutOfRange(String),
    /// The property holds a different type than the one asked for
    TypeMismatch {
        name: String,
        expected: String,
        found: String,
    },
    /// A malformed property name, or a query that needs the property to exist
    InvalidArgument(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    pub fn type_mismatch<T: ?Sized>(name: &str, found: &PropertyValue) -> Self {
        Self::TypeMismatch {
            name: name.to_string(),
            expected: short_type_name::<T>(),
            found: shorten_type_name(found.type_name()),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::OutOfRange(name) => write!(f, "no property {:?}", name),
            Self::TypeMismatch {
                name,
                expected,
                found,
            } => write!(f, "property {:?} holds {}, not {}", name, found, expected),
            Self::InvalidArgument(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for StoreError {}
