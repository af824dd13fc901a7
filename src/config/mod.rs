//! Loading StoreConfig from a TOML file

use super::*;
use std::path::Path;

mod build_config;
mod config_builder;
mod config_entries;
mod load_toml;
mod store_config;
#[cfg(test)]
mod tests;

pub use build_config::{build_config, build_config_with};
pub use store_config::{NameFormatting, StoreConfig};

use config_builder::*;
use config_entries::*;
use load_toml::*;
