//! `AppMode`-specific key handling modules.

pub(crate) mod browse;
pub(crate) mod help;
