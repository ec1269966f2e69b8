//! the main application
pub mod cli;
pub mod core;
pub mod handlers;
pub mod logging;

pub use core::SpectrumApp;
