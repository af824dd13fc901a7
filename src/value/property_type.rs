use super::*;
use cgmath::{
    BaseFloat, Matrix2, Matrix3, Matrix4, Point2, Point3, Quaternion, Vector2, Vector3, Vector4,
};

/// A type that can be stored in a `PropertyStore`.
///
/// Stores own their values outright, so only value types implement this. Shared handles
/// (`Rc`, `Arc`), references and raw pointers are left out on purpose, which means trying
/// to store one is a compile error rather than a runtime failure:
///
/// ```compile_fail
/// use property_store::PropertyStore;
/// use std::rc::Rc;
///
/// let store = PropertyStore::create("material");
/// store.set("shared", Rc::new(5), false).unwrap();
/// ```
///
/// Implement it for your own types to store them. Override `name_fragment()` if values of
/// the type should be usable inside `[@reference]` property names.
pub trait PropertyType: Clone + PartialEq + Debug + 'static {
    /// How this value is spelled when substituted into another property's name. None if
    /// the type can't be used that way.
    fn name_fragment(&self) -> Option<String> {
        None
    }
}

macro_rules! name_like_property_types {
    ($($t:ty),* $(,)?) => {
        $(
            impl PropertyType for $t {
                fn name_fragment(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

name_like_property_types!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String,
);

impl PropertyType for f32 {}
impl PropertyType for f64 {}
impl PropertyType for () {}

impl<T: PropertyType> PropertyType for Option<T> {}
impl<T: PropertyType> PropertyType for Vec<T> {}
impl<T: PropertyType, const N: usize> PropertyType for [T; N] {}
impl<T: PropertyType> PropertyType for HashMap<String, T> {}

impl<A: PropertyType> PropertyType for (A,) {}
impl<A: PropertyType, B: PropertyType> PropertyType for (A, B) {}
impl<A: PropertyType, B: PropertyType, C: PropertyType> PropertyType for (A, B, C) {}
impl<A: PropertyType, B: PropertyType, C: PropertyType, D: PropertyType> PropertyType
    for (A, B, C, D)
{
}

macro_rules! cgmath_property_types {
    ($($t:ident),* $(,)?) => {
        $(
            impl<S: BaseFloat + 'static> PropertyType for $t<S> {}
        )*
    };
}

cgmath_property_types!(
    Vector2, Vector3, Vector4, Point2, Point3, Matrix2, Matrix3, Matrix4, Quaternion,
);
