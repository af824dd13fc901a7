use super::*;

const PLACEHOLDER_OPEN: &str = "${";
const PLACEHOLDER_CLOSE: char = '}';

/// Resolves a templated property name without needing a store: every `${variable}` is
/// replaced with its value from `variables`. Placeholders with no bound variable are left as
/// they are, as is an unterminated `${`.
pub fn get_actual_property_name(variables: &HashMap<String, String>, property_name: &str) -> String {
    let mut result = String::with_capacity(property_name.len());
    let mut rest = property_name;
    while let Some(open) = rest.find(PLACEHOLDER_OPEN) {
        result.push_str(&rest[..open]);
        rest = &rest[open..];
        let after_open = &rest[PLACEHOLDER_OPEN.len()..];
        let close = match after_open.find(PLACEHOLDER_CLOSE) {
            Some(close) => close,
            None => {
                debug!("unterminated placeholder in property name {:?}", property_name);
                break;
            }
        };
        let lookup = lookup_variable(variables, &after_open[..close]);
        lookup.or_log_debug(property_name);
        match lookup {
            Ok(value) => result.push_str(value),
            Err(_) => result.push_str(&rest[..PLACEHOLDER_OPEN.len() + close + 1]),
        }
        rest = &after_open[close + 1..];
    }
    result.push_str(rest);
    result
}

fn lookup_variable<'a>(
    variables: &'a HashMap<String, String>,
    variable: &str,
) -> Result<&'a str, String> {
    variables
        .get(variable)
        .map(String::as_str)
        .ok_or_else(|| format!("no value bound to placeholder ${{{}}}", variable))
}
