//! Path listing, normalization and tree rendering.
//!
//! A flat list of absolute paths is read from disk, made relative to a root
//! prefix, folded into a [`PathTree`] and rendered with box-drawing connectors.

mod output;
mod path_list;
mod root_prefix;
mod tree;

pub use output::{WriteError, write_output};
pub use path_list::{LoadError, PathList};
pub use root_prefix::RootPrefix;
pub use tree::PathTree;
