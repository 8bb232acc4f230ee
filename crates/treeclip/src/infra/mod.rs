//! External capabilities: local filesystem access and the system clipboard.

pub mod clipboard;
pub mod fs_source;
