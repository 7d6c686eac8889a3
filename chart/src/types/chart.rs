//! Sparse, case-insensitive type effectiveness chart

use std::collections::{BTreeMap, BTreeSet};

/// Directional effectiveness chart keyed by attacking and defending type names.
///
/// Names are case-insensitive: every operation uppercases its inputs before
/// touching the map, so `"Fire"` and `"FIRE"` refer to the same type.
/// An attacking type is only present while it has at least one interaction.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ChartMap", into = "ChartMap"))]
pub struct TypeChart {
    chart: ChartMap,
}

type ChartMap = BTreeMap<String, BTreeMap<String, f64>>;

// Deserialized maps are rebuilt through `add_interaction` so names get
// uppercased and empty rows are dropped.
impl From<ChartMap> for TypeChart {
    fn from(map: ChartMap) -> Self {
        let mut chart = TypeChart::new();
        for (attacking, defending_map) in map {
            for (defending, eff) in defending_map {
                chart.add_interaction(&attacking, &defending, eff);
            }
        }
        chart
    }
}

impl From<TypeChart> for ChartMap {
    fn from(chart: TypeChart) -> Self {
        chart.chart
    }
}

impl TypeChart {
    /// Create an empty chart
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the multiplier for `attacking` hitting `defending`.
    ///
    /// Overwrites any existing value. The multiplier is not validated.
    pub fn add_interaction(&mut self, attacking: &str, defending: &str, effectiveness: f64) -> &mut Self {
        let (attacking, defending) = normalize(attacking, defending);
        self.chart
            .entry(attacking)
            .or_default()
            .insert(defending, effectiveness);
        self
    }

    /// Remove the multiplier for `attacking` hitting `defending`, if any.
    pub fn remove_interaction(&mut self, attacking: &str, defending: &str) -> &mut Self {
        let (attacking, defending) = normalize(attacking, defending);
        if let Some(defending_map) = self.chart.get_mut(&attacking) {
            defending_map.remove(&defending);
            if defending_map.is_empty() {
                self.chart.remove(&attacking);
            }
        }
        self
    }

    /// Look up the multiplier for `attacking` hitting `defending`
    pub fn effectiveness(&self, attacking: &str, defending: &str) -> Option<f64> {
        let (attacking, defending) = normalize(attacking, defending);
        self.chart
            .get(&attacking)
            .and_then(|defending_map| defending_map.get(&defending))
            .copied()
    }

    /// Structural comparison against an optional chart. `None` is never equal.
    pub fn equals(&self, other: Option<&TypeChart>) -> bool {
        match other {
            Some(other) => std::ptr::eq(self, other) || self == other,
            None => false,
        }
    }

    /// All attacking types with at least one interaction
    pub fn attacking_types(&self) -> BTreeSet<String> {
        self.chart.keys().cloned().collect()
    }

    /// Every defending type that appears under any attacking type
    pub fn defending_types(&self) -> BTreeSet<String> {
        self.chart
            .values()
            .flat_map(|defending_map| defending_map.keys().cloned())
            .collect()
    }

    /// Iterate `(attacking, defending, multiplier)` in sorted order
    pub fn interactions(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.chart.iter().flat_map(|(attacking, defending_map)| {
            defending_map
                .iter()
                .map(move |(defending, eff)| (attacking.as_str(), defending.as_str(), *eff))
        })
    }

    /// Number of stored interactions
    pub fn len(&self) -> usize {
        self.chart.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chart.is_empty()
    }
}

fn normalize(attacking: &str, defending: &str) -> (String, String) {
    (attacking.to_uppercase(), defending.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_chart() -> TypeChart {
        let mut chart = TypeChart::new();
        chart
            .add_interaction("Fire", "Grass", 2.0)
            .add_interaction("Water", "Grass", 0.5)
            .add_interaction("Normal", "Fire", 1.0)
            .add_interaction("Ghost", "Normal", 0.0);
        chart
    }

    #[test]
    fn test_add_interaction() {
        let mut chart = TypeChart::new();
        let cases = [
            ("FIRE", "GRASS", 2.0),
            ("WATER", "GRASS", 0.5),
            ("NORMAl", "NORMAL", 1.0),
            ("GHOST", "NORMAL", 0.0),
        ];

        for (attacking, defending, eff) in cases {
            chart.add_interaction(attacking, defending, eff);
            assert_eq!(chart.effectiveness(attacking, defending), Some(eff));
        }
    }

    #[test]
    fn test_add_interaction_overwrites() {
        let mut chart = TypeChart::new();
        chart
            .add_interaction("fire", "water", 2.0)
            .add_interaction("FIRE", "Water", 0.5);

        assert_eq!(chart.effectiveness("Fire", "WATER"), Some(0.5));
        assert_eq!(chart.len(), 1);
    }

    #[test]
    fn test_add_interaction_accepts_any_multiplier() {
        let mut chart = TypeChart::new();
        chart.add_interaction("Odd", "Case", -1.0);
        assert_eq!(chart.effectiveness("odd", "case"), Some(-1.0));
    }

    #[test]
    fn test_remove_interaction() {
        let mut chart = TypeChart::new();
        chart
            .add_interaction("WATER", "FIRE", 2.0)
            .add_interaction("WATER", "GROUND", 2.0);

        // Removing "FIRE" should leave "WATER -> GROUND"
        chart.remove_interaction("water", "fire");
        assert_eq!(chart.effectiveness("WATER", "FIRE"), None);
        assert!(chart.attacking_types().contains("WATER"));

        // Removing "GROUND" should remove "WATER" entirely
        chart.remove_interaction("Water", "Ground");
        assert_eq!(chart.effectiveness("WATER", "GROUND"), None);
        assert!(!chart.attacking_types().contains("WATER"));
        assert!(chart.is_empty());
    }

    #[test]
    fn test_remove_missing_interaction_is_noop() {
        let mut chart = sample_chart();
        let before = chart.clone();

        chart
            .remove_interaction("Dragon", "Fairy")
            .remove_interaction("Fire", "Steel");

        assert_eq!(chart, before);
    }

    #[test]
    fn test_effectiveness() {
        let chart = sample_chart();

        assert_eq!(chart.effectiveness("fire", "GRASS"), Some(2.0));
        assert_eq!(chart.effectiveness("WATER", "grass"), Some(0.5));
        assert_eq!(chart.effectiveness("Ghost", "Normal"), Some(0.0));
        assert_eq!(chart.effectiveness("Normal", "Fire"), Some(1.0));

        assert_eq!(chart.effectiveness("Electric", "Ground"), None);
        assert_eq!(chart.effectiveness("Fairy", "Ground"), None);
        assert_eq!(chart.effectiveness("Grass", "Fire"), None);
    }

    #[test]
    fn test_equals() {
        let mut chart1 = TypeChart::new();
        chart1
            .add_interaction("FIRE", "GRASS", 2.0)
            .add_interaction("WATER", "FIRE", 2.0);

        let mut chart2 = TypeChart::new();
        chart2
            .add_interaction("fire", "grass", 2.0)
            .add_interaction("water", "fire", 2.0);

        let mut chart3 = TypeChart::new();
        chart3.add_interaction("WATER", "GRASS", 2.0);

        assert!(chart1.equals(Some(&chart2)));
        assert!(!chart1.equals(Some(&chart3)));
        assert!(!chart1.equals(None));
        assert!(chart1.equals(Some(&chart1)));
    }

    #[test]
    fn test_equals_exact_multiplier() {
        let mut chart1 = TypeChart::new();
        chart1.add_interaction("Fire", "Grass", 2.0);

        let mut chart2 = TypeChart::new();
        chart2.add_interaction("Fire", "Grass", 2.0 + f64::EPSILON * 2.0);

        assert_ne!(chart1, chart2);
    }

    #[test]
    fn test_attacking_types() {
        let mut chart = TypeChart::new();
        chart
            .add_interaction("NORMAL", "NORMAL", 1.0)
            .add_interaction("NORMAL", "FIRE", 1.0)
            .add_interaction("FIRE", "NORMAL", 1.0)
            .add_interaction("FIRE", "FIRE", 0.5);

        let expected: BTreeSet<String> = ["FIRE", "NORMAL"].map(String::from).into();
        assert_eq!(chart.attacking_types(), expected);
    }

    #[test]
    fn test_defending_types() {
        let mut chart = TypeChart::new();
        chart
            .add_interaction("NORMAL", "NORMAL", 1.0)
            .add_interaction("NORMAL", "FIRE", 1.0)
            .add_interaction("FIRE", "WATER", 1.0)
            .add_interaction("FIRE", "GROUND", 0.5);

        let expected: BTreeSet<String> =
            ["FIRE", "GROUND", "NORMAL", "WATER"].map(String::from).into();
        assert_eq!(chart.defending_types(), expected);
    }

    #[test]
    fn test_interactions_sorted() {
        let chart = sample_chart();
        let all: Vec<_> = chart.interactions().collect();

        assert_eq!(
            all,
            vec![
                ("FIRE", "GRASS", 2.0),
                ("GHOST", "NORMAL", 0.0),
                ("NORMAL", "FIRE", 1.0),
                ("WATER", "GRASS", 0.5),
            ]
        );
        assert_eq!(chart.len(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let chart = sample_chart();
        let json = serde_json::to_string(&chart).unwrap();
        assert!(json.starts_with(r#"{"FIRE":{"GRASS":2.0}"#));

        let decoded: TypeChart = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, chart);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_normalizes_names() {
        let json = r#"{"fire":{"Grass":2.0},"Water":{}}"#;
        let decoded: TypeChart = serde_json::from_str(json).unwrap();

        assert_eq!(decoded.effectiveness("FIRE", "GRASS"), Some(2.0));
        assert!(!decoded.attacking_types().contains("WATER"));
    }
}
