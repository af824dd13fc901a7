//! A runtime-typed property store with change notification. Scene nodes, materials and
//! renderer state keep their heterogeneous named values in a `PropertyStore`, and anything
//! that cares about those values subscribes to the store's added/changed/removed signals.

#[macro_use]
extern crate log;
#[macro_use(new_key_type)]
extern crate slotmap;

mod config;
mod helpers;
mod name;
mod signal;
mod store;
mod value;

pub use config::{build_config, build_config_with, NameFormatting, StoreConfig};
pub use helpers::{real_filesystem, Filesystem, FilesystemTrait};
pub use name::{get_actual_property_name, parse_property_name, NameSegment};
pub use signal::{PropertySubscriber, Signal, Subscription};
pub use store::{PropertyStore, StoreError, StoreHooks, StoreRef, StoreResult};
pub use value::{ColorRgba, PropertyType, PropertyValue};

use helpers::*;

use std::{
    any::{Any, TypeId},
    cell::{Ref, RefCell},
    collections::{HashMap, HashSet},
    error::Error,
    fmt::Debug,
    rc::{Rc, Weak},
};
