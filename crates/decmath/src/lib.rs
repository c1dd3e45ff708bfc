//! decmath library — application logic for the decimal arithmetic CLI.

pub mod app;
pub mod config;
pub mod errors;
