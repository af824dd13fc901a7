use super::*;

/// Store configuration from `property_store.toml` in the working directory, or the defaults
/// if there is no such file
pub fn build_config() -> Result<StoreConfig, Box<dyn Error>> {
    build_config_with(real_filesystem(), Path::new(DEFAULT_TOML_PATH))
}

/// Store configuration from the TOML file at path on the given filesystem, or the defaults if
/// there is no such file
pub fn build_config_with(fs: Filesystem, path: &Path) -> Result<StoreConfig, Box<dyn Error>> {
    let mut builder = ConfigBuilder::new(config_entries());
    match fs.read_if_exists(path)? {
        Some(contents) => load_toml(&path.display().to_string(), &contents, &mut builder)?,
        None => debug!("{} not found, using default store config", path.display()),
    }
    Ok(builder.build())
}
