// RegPlot - ui/panels/mod.rs

pub mod chart;
pub mod summary;
