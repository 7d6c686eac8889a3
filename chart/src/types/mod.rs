//! Effectiveness chart types

mod chart;
mod standard;

pub use chart::TypeChart;
pub use standard::{standard_chart, STANDARD_TYPES};
