//! Rulesets and game balance
//!
//! `Classic` is the full game: bombs, hearts, speed scaling and extra spawns
//! as the score climbs. `Simple` is the stripped-down variant with only
//! normal balls, a fixed fall speed and one spawn per period.

use serde::{Deserialize, Serialize};

use crate::consts::BASE_FALL_SPEED;
use crate::sim::EntityKind;
use crate::sim::entity::fall_speed;
use crate::sim::spawner::{kind_for_roll, spawns_for_score};

/// Which variant of the game rules is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    #[default]
    Classic,
    Simple,
}

impl Ruleset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Classic => "classic",
            Ruleset::Simple => "simple",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "full" => Some(Ruleset::Classic),
            "simple" | "basic" => Some(Ruleset::Simple),
            _ => None,
        }
    }

    /// Fall speed for every live entity at the current score
    pub fn fall_speed(&self, score: u64) -> u32 {
        match self {
            Ruleset::Classic => fall_speed(score),
            Ruleset::Simple => BASE_FALL_SPEED,
        }
    }

    /// Entities created per spawn period at the current score
    pub fn spawns_for_score(&self, score: u64) -> usize {
        match self {
            Ruleset::Classic => spawns_for_score(score),
            Ruleset::Simple => 1,
        }
    }

    /// Map a uniform roll in [0, 1) to an entity kind
    pub fn kind_for_roll(&self, roll: f32) -> EntityKind {
        match self {
            Ruleset::Classic => kind_for_roll(roll),
            Ruleset::Simple => EntityKind::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_ruleset_is_flat() {
        let rules = Ruleset::Simple;
        assert_eq!(rules.fall_speed(0), 5);
        assert_eq!(rules.fall_speed(500), 5);
        assert_eq!(rules.spawns_for_score(99), 1);
        assert_eq!(rules.kind_for_roll(0.01), EntityKind::Normal);
        assert_eq!(rules.kind_for_roll(0.12), EntityKind::Normal);
    }

    #[test]
    fn test_classic_ruleset_scales() {
        let rules = Ruleset::Classic;
        assert_eq!(rules.fall_speed(25), 7);
        assert_eq!(rules.spawns_for_score(30), 3);
        assert_eq!(rules.kind_for_roll(0.05), EntityKind::Hazard);
    }

    #[test]
    fn test_ruleset_parse() {
        assert_eq!(Ruleset::from_str("Classic"), Some(Ruleset::Classic));
        assert_eq!(Ruleset::from_str(" simple "), Some(Ruleset::Simple));
        assert_eq!(Ruleset::from_str("hard"), None);
        assert_eq!(Ruleset::from_str(Ruleset::Simple.as_str()), Some(Ruleset::Simple));
    }
}
