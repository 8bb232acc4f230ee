pub mod app;
pub mod concat;
pub mod domain;
pub mod infra;
pub mod runtime;
pub mod scan;
pub mod ui;
