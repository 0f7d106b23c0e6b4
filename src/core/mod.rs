// RegPlot - core/mod.rs
//
// Core business logic layer.
// Dependencies: util layer plus serialisation crates for export.
// Must NOT depend on: ui, platform, app, or touch the filesystem directly.

pub mod chart;
pub mod export;
pub mod extract;
pub mod model;
pub mod variables;
