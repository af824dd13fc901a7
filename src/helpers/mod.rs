//! General useful bits and bobs

use super::*;

mod filesystem;
mod or_log;
mod short_type_name;
#[cfg(test)]
mod test_helpers;

pub use filesystem::{real_filesystem, Filesystem, FilesystemTrait};
pub use or_log::OrLog;
pub use short_type_name::{short_type_name, shorten_type_name};
#[cfg(test)]
pub use test_helpers::*;
