use super::*;

/// Largest accepted max_indirection_depth. Formatting recurses once per level.
pub const INDIRECTION_DEPTH_LIMIT: i64 = 64;

/// Every key property_store.toml may contain
pub fn config_entries() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::new("max_indirection_depth", |conf, value| {
            let depth = value
                .as_integer()
                .ok_or_else(|| format!("{} is not an integer", value))?;
            if !(1..=INDIRECTION_DEPTH_LIMIT).contains(&depth) {
                return Err(format!(
                    "{} is outside 1..={}",
                    depth, INDIRECTION_DEPTH_LIMIT
                ));
            }
            conf.max_indirection_depth = depth as usize;
            Ok(())
        }),
        ConfigEntry::new("trace_signals", |conf, value| {
            conf.trace_signals = value
                .as_bool()
                .ok_or_else(|| format!("{} is not a bool", value))?;
            Ok(())
        }),
        ConfigEntry::new("name_formatting", |conf, value| {
            let name = value
                .as_str()
                .ok_or_else(|| format!("{} is not a string", value))?;
            conf.name_formatting = NameFormatting::from_config_name(name)?;
            Ok(())
        }),
    ]
}
