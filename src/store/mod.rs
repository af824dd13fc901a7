//! The property store itself

use super::*;
use std::collections::hash_map::Entry;
use uuid::Uuid;

#[allow(clippy::module_inception)]
mod property_store;
mod store_error;
mod store_hooks;

pub use property_store::{PropertyStore, StoreRef};
pub use store_error::{StoreError, StoreResult};
pub use store_hooks::StoreHooks;
