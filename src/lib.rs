//! Library exports for the viewer binary, chart tool, tests, and benches.
/// Agreement classification and correctness counts.
pub mod analysis;
/// Application directory helpers.
pub mod app_dirs;
/// Static chart rendering.
pub mod chart;
/// TOML configuration.
pub mod config;
/// Record model, CSV loading, and dataset discovery.
pub mod dataset;
/// Interactive linked view.
pub mod egui_app;
/// Logging setup.
pub mod logging;
/// Box-selection math.
pub mod selection;
