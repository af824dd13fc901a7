use super::*;

pub const DEFAULT_TOML_PATH: &str = "property_store.toml";

/// Feeds every key of a TOML document into the builder. file names the document in errors.
pub fn load_toml(
    file: &str,
    contents: &str,
    builder: &mut ConfigBuilder,
) -> Result<(), Box<dyn Error>> {
    let table = match contents.parse::<toml::Value>()? {
        toml::Value::Table(table) => table,
        _ => return Err(format!("{}: toplevel value is not a table", file).into()),
    };
    for (name, value) in &table {
        builder
            .set(name, value, file)
            .map_err(|e| format!("{}: {}", file, e))?;
    }
    Ok(())
}
