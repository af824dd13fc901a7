use super::*;

type ApplyFn = fn(&mut StoreConfig, &toml::Value) -> Result<(), String>;

/// A key of the config file, and how its value is checked and written into a StoreConfig
pub struct ConfigEntry {
    name: &'static str,
    apply_fn: ApplyFn,
}

impl ConfigEntry {
    pub fn new(name: &'static str, apply_fn: ApplyFn) -> Self {
        Self { name, apply_fn }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Starts from the default StoreConfig and applies config file keys onto it one at a time
pub struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
    conf: StoreConfig,
    /// Entry name -> where its value was set, for entries that are not at their default
    sources: HashMap<&'static str, String>,
}

impl ConfigBuilder {
    pub fn new(entries: Vec<ConfigEntry>) -> Self {
        let mut names = HashSet::new();
        for entry in &entries {
            if !names.insert(entry.name) {
                panic!("duplicate configuration entry {}", entry.name);
            }
        }
        Self {
            entries,
            conf: StoreConfig::default(),
            sources: HashMap::new(),
        }
    }

    /// source says where the value came from, and only shows up in the log
    pub fn set(&mut self, name: &str, value: &toml::Value, source: &str) -> Result<(), String> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| format!("{} is not a valid option", name))?;
        (entry.apply_fn)(&mut self.conf, value).map_err(|e| format!("{}: {}", name, e))?;
        if let Some(previous) = self.sources.insert(entry.name, source.to_string()) {
            debug!("{} from {} replaces the value from {}", name, source, previous);
        }
        Ok(())
    }

    pub fn build(self) -> StoreConfig {
        for (name, source) in &self.sources {
            debug!("store config {} set by {}", name, source);
        }
        self.conf
    }
}
