//! Property name formatting. Names are resolved in two passes: `parse_property_name()` finds
//! the `[@reference]` markers without touching any store, then `resolve_segments()` looks each
//! reference up and splices its value into the name.

use super::*;

mod actual_property_name;

pub use actual_property_name::get_actual_property_name;

const REFERENCE_OPEN: &str = "[@";

/// A piece of a property name
#[derive(Debug, Clone, PartialEq)]
pub enum NameSegment {
    /// Copied into the formatted name as is
    Literal(String),
    /// Name of another property, whose value takes this segment's place. It may contain
    /// references itself.
    Reference(String),
}

/// Splits a name into literal text and `[@reference]` contents. The brackets of a reference
/// stay in the surrounding literals, so `lights[@active].color` parses as `lights[`, `active`,
/// `].color`. Brackets not followed by `@` are plain text.
pub fn parse_property_name(name: &str) -> StoreResult<Vec<NameSegment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = name;
    while let Some(open) = rest.find(REFERENCE_OPEN) {
        literal.push_str(&rest[..=open]);
        let body_start = open + REFERENCE_OPEN.len();
        let body_len = matching_bracket(&rest[body_start..]).ok_or_else(|| {
            StoreError::InvalidArgument(format!("unclosed property reference in {:?}", name))
        })?;
        if body_len == 0 {
            return Err(StoreError::InvalidArgument(format!(
                "empty property reference in {:?}",
                name
            )));
        }
        if !literal.is_empty() {
            segments.push(NameSegment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(NameSegment::Reference(
            rest[body_start..body_start + body_len].to_string(),
        ));
        // the closing bracket starts the next literal
        rest = &rest[body_start + body_len..];
    }
    literal.push_str(rest);
    if !literal.is_empty() || segments.is_empty() {
        segments.push(NameSegment::Literal(literal));
    }
    Ok(segments)
}

/// Byte offset of the `]` that closes a reference body, skipping nested brackets
fn matching_bracket(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in body.char_indices() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => return Some(i),
            ']' => depth -= 1,
            _ => (),
        }
    }
    None
}

/// Joins segments back into a name, asking `resolve_reference` for the text of each
/// reference
pub fn resolve_segments<F>(segments: &[NameSegment], mut resolve_reference: F) -> StoreResult<String>
where
    F: FnMut(&str) -> StoreResult<String>,
{
    let mut result = String::new();
    for segment in segments {
        match segment {
            NameSegment::Literal(text) => result.push_str(text),
            NameSegment::Reference(name) => result.push_str(&resolve_reference(name)?),
        }
    }
    Ok(result)
}

pub fn has_references(name: &str) -> bool {
    name.contains(REFERENCE_OPEN)
}
