// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod host;
pub mod identity;
pub mod sets;

#[cfg(feature = "cli")]
pub mod cli;
