//! Case-insensitive type effectiveness charts and combined weakness tables.
//!
//! # Overview
//!
//! `pokecore-chart` holds the domain types; `pokecore-csv` moves them in and
//! out of CSV:
//!
//! ```text
//! pokecore-csv (CSV codec)
//!        │
//!        ▼
//! pokecore-chart (chart + weakness tables) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! - [`TypeChart`] - Sparse attacking → defending → multiplier chart
//! - [`WeaknessTable`] - Attacking types grouped by combined effectiveness
//!   against a set of defending types
//! - [`Combined`] - Group key: a combined multiplier or `Undefined`
//!
//! # Example Usage
//!
//! ```
//! use pokecore_chart::{Combined, TypeChart, WeaknessTable};
//!
//! let mut chart = TypeChart::new();
//! chart
//!     .add_interaction("Fire", "Grass", 2.0)
//!     .add_interaction("Water", "Grass", 0.5)
//!     .add_interaction("Ghost", "Normal", 0.0);
//!
//! assert_eq!(chart.effectiveness("fire", "GRASS"), Some(2.0));
//! assert_eq!(chart.effectiveness("Electric", "Ground"), None);
//!
//! let table = WeaknessTable::new(&chart, &["Grass"]);
//! assert_eq!(table.weaknesses().into_iter().collect::<Vec<_>>(), vec!["FIRE"]);
//! assert_eq!(table.combined_for("Ghost"), Some(Combined::Undefined));
//! ```

pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use query::{combined_effectiveness, Combined, WeaknessTable};
pub use types::{standard_chart, TypeChart, STANDARD_TYPES};
