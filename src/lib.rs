//! spectrum is the catalog core and storefront server for Spectrum Themes
#![deny(missing_docs, rustdoc::missing_crate_level_docs)]

#[macro_use]
pub mod macros;

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod serve;
pub mod utils;
