//! Attacking types grouped by combined effectiveness against a set of defending types

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::types::TypeChart;

/// Combined multiplier of one attacking type against every defending type in a set.
///
/// `Undefined` means the chart had no entry for at least one pair. Ordering is
/// total: defined values compare with `f64::total_cmp` (with `-0.0` treated as
/// `0.0`) and `Undefined` sorts after every defined value.
#[derive(Debug, Clone, Copy)]
pub enum Combined {
    Defined(f64),
    Undefined,
}

impl Combined {
    /// The multiplier, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            Combined::Defined(value) => Some(*value),
            Combined::Undefined => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Combined::Undefined)
    }
}

impl Ord for Combined {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Combined::Defined(a), Combined::Defined(b)) => fold_zero(*a).total_cmp(&fold_zero(*b)),
            (Combined::Defined(_), Combined::Undefined) => Ordering::Less,
            (Combined::Undefined, Combined::Defined(_)) => Ordering::Greater,
            (Combined::Undefined, Combined::Undefined) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Combined {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Combined {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Combined {}

fn fold_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Multiply the chart's multipliers for `attacking` against each of `types`.
///
/// Stops at the first pair missing from the chart and returns `Undefined`;
/// a missing interaction is never treated as neutral. An empty `types`
/// slice gives `Defined(1.0)`.
pub fn combined_effectiveness<S: AsRef<str>>(chart: &TypeChart, attacking: &str, types: &[S]) -> Combined {
    let mut effect = 1.0;
    for defending in types {
        match chart.effectiveness(attacking, defending.as_ref()) {
            Some(eff) => effect *= eff,
            None => return Combined::Undefined,
        }
    }
    Combined::Defined(effect)
}

/// Snapshot of every attacking type in a chart, grouped by its combined
/// effectiveness against a fixed list of defending types.
///
/// Each attacking type lands in exactly one group. The table keeps no
/// reference to the chart; rebuild it after the chart changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeaknessTable {
    table: BTreeMap<Combined, BTreeSet<String>>,
}

impl WeaknessTable {
    /// Group the chart's attacking types by combined effectiveness against `types`
    pub fn new<S: AsRef<str>>(chart: &TypeChart, types: &[S]) -> Self {
        let mut result = Self::default();
        for attacking in chart.attacking_types() {
            let effect = combined_effectiveness(chart, &attacking, types);
            result.table.entry(effect).or_default().insert(attacking);
        }
        result
    }

    /// Groups as plain lists, keyed by combined effectiveness
    pub fn as_map(&self) -> BTreeMap<Combined, Vec<String>> {
        self.table
            .iter()
            .map(|(effect, attacking)| (*effect, attacking.iter().cloned().collect()))
            .collect()
    }

    /// Attacking types sharing the given combined effectiveness
    pub fn group(&self, effect: Combined) -> Option<&BTreeSet<String>> {
        self.table.get(&effect)
    }

    /// Which group an attacking type was placed in
    pub fn combined_for(&self, attacking: &str) -> Option<Combined> {
        let attacking = attacking.to_uppercase();
        self.table
            .iter()
            .find(|(_, members)| members.contains(&attacking))
            .map(|(effect, _)| *effect)
    }

    /// Iterate groups in ascending order, `Undefined` last
    pub fn iter(&self) -> impl Iterator<Item = (Combined, &BTreeSet<String>)> {
        self.table.iter().map(|(effect, members)| (*effect, members))
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Attacking types that are super effective (>1x)
    pub fn weaknesses(&self) -> BTreeSet<String> {
        self.collect_where(|eff| eff > 1.0)
    }

    /// Attacking types that are resisted (between 0x and 1x, exclusive)
    pub fn resistances(&self) -> BTreeSet<String> {
        self.collect_where(|eff| eff > 0.0 && eff < 1.0)
    }

    /// Attacking types with no effect (0x)
    pub fn immunities(&self) -> BTreeSet<String> {
        self.collect_where(|eff| eff == 0.0)
    }

    /// Attacking types with exactly 1x
    pub fn neutral(&self) -> BTreeSet<String> {
        self.collect_where(|eff| eff == 1.0)
    }

    /// Attacking types missing at least one interaction
    pub fn undefined(&self) -> BTreeSet<String> {
        self.group(Combined::Undefined).cloned().unwrap_or_default()
    }

    fn collect_where(&self, predicate: impl Fn(f64) -> bool) -> BTreeSet<String> {
        self.table
            .iter()
            .filter(|(effect, _)| effect.value().is_some_and(&predicate))
            .flat_map(|(_, members)| members.iter().cloned())
            .collect()
    }
}
