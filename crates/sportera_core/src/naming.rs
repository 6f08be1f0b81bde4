//! Team names and name-derived attributes.
//!
//! A team's baseline attributes are a pure function of its name: the rolling
//! hash below seeds attack/defense/form, so procedurally generated opponents
//! need no stored state at all. The same name always comes back with the
//! same numbers, across sessions and devices.

use serde::{Deserialize, Serialize};

use crate::rng::pick_index;

/// Prefix vocabulary for procedural team names.
pub const TEAM_PREFIXES: [&str; 15] = [
    "Atlas", "Nova", "Solar", "Echo", "Prism", "Horizon", "Ridge", "Vortex", "Zenith", "Crescent",
    "Monarch", "Titan", "Apex", "Pulse", "Storm",
];

/// Suffix vocabulary for procedural team names.
pub const TEAM_SUFFIXES: [&str; 12] = [
    "City", "United", "Kings", "Rovers", "Town", "AC", "Valley", "FC", "SC", "Athletic", "Rangers",
    "Dynamo",
];

/// League names attached to generated fixtures.
pub const LEAGUES: [&str; 6] =
    ["Apex League", "Nova Cup", "Division One", "Premier Cup", "Elite League", "Champions League"];

/// Attempt budget for unique-name generation. Once spent, the generator
/// returns however many opponents it found instead of looping forever.
const NAME_ATTEMPT_BUDGET: u32 = 50;

/// Rolling hash over a team name's UTF-16 units.
///
/// `h = (h << 5) - h + unit` with wrapping 32-bit arithmetic, absolute value
/// taken at the end. Not cryptographic; collisions merely duplicate cosmetic
/// stats between two names and violate nothing.
pub fn name_hash(name: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in name.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(unit as i32);
    }
    h.unsigned_abs()
}

/// Baseline attack/defense/form, each in `0..=5`, fixed for a name's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeamBaseline {
    pub attack: u8,
    pub defense: u8,
    pub form: u8,
}

impl TeamBaseline {
    /// Baseline for a user-managed team. Owned teams start from a narrower
    /// band (`% 4`) than procedural opponents so early training is felt.
    pub fn from_name(name: &str) -> Self {
        let h = name_hash(name);
        Self { attack: (h % 4) as u8, defense: ((h >> 2) % 4) as u8, form: ((h >> 4) % 4) as u8 }
    }

    /// Baseline for a procedural opponent, drawn from the full `0..=5` band.
    pub fn opponent_from_name(name: &str) -> Self {
        let h = name_hash(name);
        Self { attack: (h % 6) as u8, defense: ((h >> 2) % 6) as u8, form: ((h >> 4) % 6) as u8 }
    }
}

/// A procedural opponent: name, baseline, and the display scalars the roster
/// screens show before any match is simulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpponentProfile {
    pub name: String,
    #[serde(flatten)]
    pub baseline: TeamBaseline,
    pub strength: u8,
    pub leadership: u8,
}

/// Derive the full profile for an opponent name.
pub fn opponent_profile(name: &str) -> OpponentProfile {
    let baseline = TeamBaseline::opponent_from_name(name);
    let sum = (baseline.attack + baseline.defense + baseline.form) as u32;
    OpponentProfile {
        name: name.to_string(),
        baseline,
        strength: (30 + sum * 8).min(100) as u8,
        leadership: 1 + (baseline.attack + baseline.defense) / 2,
    }
}

/// Generate up to `count` opponents with pairwise-distinct names, skipping
/// anything in `exclude`. Bounded by the attempt budget: an adversarial
/// exclusion list produces a short result, never an infinite loop.
pub fn generate_opponents(count: usize, exclude: &[String], seed: i64) -> Vec<OpponentProfile> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    let mut attempts = 0u32;
    while out.len() < count && attempts < NAME_ATTEMPT_BUDGET {
        attempts += 1;
        let pi = pick_index((seed + attempts as i64 * 7) as f64, TEAM_PREFIXES.len());
        let si = pick_index((seed + attempts as i64 * 11) as f64, TEAM_SUFFIXES.len());
        let name = format!("{} {}", TEAM_PREFIXES[pi], TEAM_SUFFIXES[si]);
        if seen.contains(&name) || exclude.contains(&name) {
            continue;
        }
        seen.push(name.clone());
        out.push(opponent_profile(&name));
    }
    out
}

/// Deterministic candidate pool of full team names for fixture generation:
/// one name per prefix, suffix chosen by the seed, duplicates removed.
pub fn candidate_names(seed: i64) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for (i, prefix) in TEAM_PREFIXES.iter().enumerate() {
        let si = pick_index((seed + i as i64 * 7) as f64, TEAM_SUFFIXES.len());
        let name = format!("{} {}", prefix, TEAM_SUFFIXES[si]);
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Pick two distinct names out of `names` for a fixture.
pub fn pick_pairing(names: &[String], seed: i64) -> Option<(String, String)> {
    if names.len() < 2 {
        return None;
    }
    let first = pick_index(seed as f64, names.len());
    let mut second = pick_index((seed + 1) as f64, names.len());
    let mut bump = 1;
    while second == first {
        bump += 1;
        second = pick_index((seed + bump) as f64, names.len());
    }
    Some((names[first].clone(), names[second].clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_stable() {
        let a = name_hash("Atlas City");
        let b = name_hash("Atlas City");
        assert_eq!(a, b);
        assert_ne!(name_hash("Atlas City"), name_hash("Atlas Town"));
    }

    #[test]
    fn test_baseline_stability_and_range() {
        let first = TeamBaseline::from_name("Atlas City");
        let second = TeamBaseline::from_name("Atlas City");
        assert_eq!(first, second);
        for name in ["Atlas City", "Nova United", "Zenith FC", "x", ""] {
            let owned = TeamBaseline::from_name(name);
            assert!(owned.attack <= 5 && owned.defense <= 5 && owned.form <= 5);
            let opp = TeamBaseline::opponent_from_name(name);
            assert!(opp.attack <= 5 && opp.defense <= 5 && opp.form <= 5);
        }
    }

    #[test]
    fn test_opponent_profile_bounds() {
        for name in ["Atlas City", "Storm Dynamo", "Crescent Rangers"] {
            let p = opponent_profile(name);
            assert!((30..=100).contains(&(p.strength as u32)));
            assert!((1..=10).contains(&(p.leadership as u32)));
        }
    }

    #[test]
    fn test_opponents_unique_and_excluded() {
        let exclude = vec!["Atlas City".to_string(), "Nova United".to_string()];
        let opponents = generate_opponents(10, &exclude, 12345);
        assert!(opponents.len() <= 10);
        for (i, a) in opponents.iter().enumerate() {
            assert!(!exclude.contains(&a.name));
            for b in &opponents[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_opponents_budget_contains_failure() {
        // Exclude the entire name space: the generator must give up after the
        // attempt budget and return an empty list rather than spin.
        let mut exclude = Vec::new();
        for p in TEAM_PREFIXES {
            for s in TEAM_SUFFIXES {
                exclude.push(format!("{} {}", p, s));
            }
        }
        let opponents = generate_opponents(5, &exclude, 99);
        assert!(opponents.is_empty());
    }

    #[test]
    fn test_pairing_distinct() {
        let names = candidate_names(777);
        for seed in 0..50 {
            let (home, away) = pick_pairing(&names, seed).unwrap();
            assert_ne!(home, away);
        }
    }
}
