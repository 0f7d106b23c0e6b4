// RegPlot - platform/mod.rs
//
// Platform abstraction layer: file access and configuration.
// Dependencies: standard library, directories, toml, util layer.
// Must NOT depend on: core, app, ui.

pub mod config;
pub mod fs;
