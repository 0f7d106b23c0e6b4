// RegPlot - app/mod.rs
//
// Application layer: orchestration and viewer state.
// Dependencies: core layer, platform file access.
// Must NOT depend on: ui.

pub mod pipeline;
pub mod state;
