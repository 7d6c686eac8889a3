//! Derived views over a type chart
//!
//! Answers questions about a defender made of one or more types: which
//! attacking types hit it hard, which it resists, and which the chart
//! cannot score because an interaction is missing.

mod weakness;

pub use weakness::{combined_effectiveness, Combined, WeaknessTable};
