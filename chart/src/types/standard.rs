//! Built-in modern (Gen 6+) type chart

use super::chart::TypeChart;

/// The 18 types of the modern chart, in dex order
pub const STANDARD_TYPES: [&str; 18] = [
    "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

/// Non-neutral matchups of one attacking type. Anything not listed is 1x.
struct Matchups {
    attacking: &'static str,
    super_effective: &'static [&'static str],
    resisted: &'static [&'static str],
    immune: &'static [&'static str],
}

#[rustfmt::skip]
static MATCHUPS: [Matchups; 18] = [
    Matchups { attacking: "Normal", super_effective: &[], resisted: &["Rock", "Steel"], immune: &["Ghost"] },
    Matchups { attacking: "Fire", super_effective: &["Grass", "Ice", "Bug", "Steel"], resisted: &["Fire", "Water", "Rock", "Dragon"], immune: &[] },
    Matchups { attacking: "Water", super_effective: &["Fire", "Ground", "Rock"], resisted: &["Water", "Grass", "Dragon"], immune: &[] },
    Matchups { attacking: "Electric", super_effective: &["Water", "Flying"], resisted: &["Electric", "Grass", "Dragon"], immune: &["Ground"] },
    Matchups { attacking: "Grass", super_effective: &["Water", "Ground", "Rock"], resisted: &["Fire", "Grass", "Poison", "Flying", "Bug", "Dragon", "Steel"], immune: &[] },
    Matchups { attacking: "Ice", super_effective: &["Grass", "Ground", "Flying", "Dragon"], resisted: &["Fire", "Water", "Ice", "Steel"], immune: &[] },
    Matchups { attacking: "Fighting", super_effective: &["Normal", "Ice", "Rock", "Dark", "Steel"], resisted: &["Poison", "Flying", "Psychic", "Bug", "Fairy"], immune: &["Ghost"] },
    Matchups { attacking: "Poison", super_effective: &["Grass", "Fairy"], resisted: &["Poison", "Ground", "Rock", "Ghost"], immune: &["Steel"] },
    Matchups { attacking: "Ground", super_effective: &["Fire", "Electric", "Poison", "Rock", "Steel"], resisted: &["Grass", "Bug"], immune: &["Flying"] },
    Matchups { attacking: "Flying", super_effective: &["Grass", "Fighting", "Bug"], resisted: &["Electric", "Rock", "Steel"], immune: &[] },
    Matchups { attacking: "Psychic", super_effective: &["Fighting", "Poison"], resisted: &["Psychic", "Steel"], immune: &["Dark"] },
    Matchups { attacking: "Bug", super_effective: &["Grass", "Psychic", "Dark"], resisted: &["Fire", "Fighting", "Poison", "Flying", "Ghost", "Steel", "Fairy"], immune: &[] },
    Matchups { attacking: "Rock", super_effective: &["Fire", "Ice", "Flying", "Bug"], resisted: &["Fighting", "Ground", "Steel"], immune: &[] },
    Matchups { attacking: "Ghost", super_effective: &["Psychic", "Ghost"], resisted: &["Dark"], immune: &["Normal"] },
    Matchups { attacking: "Dragon", super_effective: &["Dragon"], resisted: &["Steel"], immune: &["Fairy"] },
    Matchups { attacking: "Dark", super_effective: &["Psychic", "Ghost"], resisted: &["Fighting", "Dark", "Fairy"], immune: &[] },
    Matchups { attacking: "Steel", super_effective: &["Ice", "Rock", "Fairy"], resisted: &["Fire", "Water", "Electric", "Steel"], immune: &[] },
    Matchups { attacking: "Fairy", super_effective: &["Fighting", "Dragon", "Dark"], resisted: &["Fire", "Poison", "Steel"], immune: &[] },
];

/// Build the full 18x18 modern chart. Every pair is present, so combined
/// effectiveness against standard types is never undefined.
pub fn standard_chart() -> TypeChart {
    let mut chart = TypeChart::new();
    for matchups in &MATCHUPS {
        for defending in STANDARD_TYPES {
            chart.add_interaction(matchups.attacking, defending, 1.0);
        }
        for defending in matchups.super_effective {
            chart.add_interaction(matchups.attacking, defending, 2.0);
        }
        for defending in matchups.resisted {
            chart.add_interaction(matchups.attacking, defending, 0.5);
        }
        for defending in matchups.immune {
            chart.add_interaction(matchups.attacking, defending, 0.0);
        }
    }
    chart
}
