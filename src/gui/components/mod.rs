// src/gui/components/mod.rs
pub mod code_bar;
pub mod data_table;
pub mod deck_bar;
pub mod post_panel;
