//! Type-erased storage for property values

use super::*;

mod color_rgba;
mod property_type;
mod property_value;

pub use color_rgba::ColorRgba;
pub use property_type::PropertyType;
pub use property_value::PropertyValue;
