use std::any::type_name;

/// Type name with every module path stripped, including inside generic arguments, so
/// `alloc::vec::Vec<cgmath::vector::Vector3<f32>>` becomes `Vec<Vector3<f32>>`
pub fn short_type_name<T: ?Sized>() -> String {
    shorten_type_name(type_name::<T>())
}

pub fn shorten_type_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut segment_start = 0;
    for (i, c) in name.char_indices() {
        match c {
            ':' => segment_start = i + 1,
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                result.push_str(&name[segment_start..i]);
                result.push(c);
                segment_start = i + 1;
            }
            _ => (),
        }
    }
    result.push_str(&name[segment_start..]);
    result
}
