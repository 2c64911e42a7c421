// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the owned chart context and its rendering API.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod series;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::{Axis, Tick, TickStyle};
pub use chart::{Chart, RenderOptions};
pub use error::ChartError;
pub use series::Series;
pub use text::{Anchor, TextShaper};
pub use theme::Theme;
pub use ticks::{arange, format_tick, linspace};
pub use types::Insets;
