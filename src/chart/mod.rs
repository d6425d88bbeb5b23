//! Static chart rendering (PNG via plotters).

/// Grouped correctness bars per class.
pub mod bars;
/// Scatter plot of the projected data space.
pub mod scatter;
/// Shared color mapping and render error type.
pub mod style;

pub use bars::render_bars;
pub use scatter::render_scatter;
pub use style::ChartError;
