// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod fonts;
pub mod jobs;
pub mod progress;

pub use app::run;
