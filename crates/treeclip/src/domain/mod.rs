//! Core data model shared by the scanner, the selection model, and the
//! concatenator.

pub mod entry;
pub mod listing;
pub mod selection;
