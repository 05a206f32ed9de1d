// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod analysis;
pub mod config;
pub mod core;
pub mod deckcode;
pub mod gui;
pub mod progress;
pub mod session;
pub mod source;
pub mod specs;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
