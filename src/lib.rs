// src/lib.rs

#[macro_use]
pub mod macros;

pub mod catalog;
pub mod cli;
pub mod fetch;
pub mod net;
pub mod params;
pub mod progress;
pub mod store;
pub mod verse;
