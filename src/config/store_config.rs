use super::*;

/// How property names given to a store are turned into storage keys
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NameFormatting {
    /// `[@reference]` markers are replaced with the referenced property's value
    Indirect,
    /// Names are used exactly as given
    Literal,
}

impl NameFormatting {
    /// Spellings used in the config file
    const CONFIG_NAMES: [(&'static str, NameFormatting); 2] = [
        ("indirect", NameFormatting::Indirect),
        ("literal", NameFormatting::Literal),
    ];

    pub fn from_config_name(name: &str) -> Result<Self, String> {
        Self::CONFIG_NAMES
            .iter()
            .find(|(config_name, _)| *config_name == name)
            .map(|(_, formatting)| *formatting)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::CONFIG_NAMES.iter().map(|(n, _)| *n).collect();
                format!(
                    "{:?} is not a name formatting, valid options are {}",
                    name,
                    valid.join(", ")
                )
            })
    }
}

/// Configuration shared by a store and everything cloned from it
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// How deep `[@reference]` markers may nest inside each other
    pub max_indirection_depth: usize,
    /// Log every signal dispatch at trace level
    pub trace_signals: bool,
    pub name_formatting: NameFormatting,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_indirection_depth: 8,
            trace_signals: false,
            name_formatting: NameFormatting::Indirect,
        }
    }
}
