//! Fixture and odds-market generation.
//!
//! Matches and their probability tables are derived entirely from a numeric
//! seed through the stateless PRNG, each quantity at its own fixed offset so
//! regenerating with the same seed reproduces the identical card. Every
//! market's percentages are normalized to sum to exactly 100.

use crate::models::{GeneratedMatch, MarketPick, MarketTable, Period};
use crate::naming::{candidate_names, pick_pairing, LEAGUES};
use crate::rng::{pick, pick_index, seeded_random};

/// Kickoff labels for fixtures that are not live yet.
const KICKOFF_LABELS: [&str; 3] = ["18:30", "20:00", "Tomorrow"];

/// Seed stride between consecutive matches in a batch.
const BATCH_SEED_STRIDE: i64 = 1000;

/// Convert raw weights to integer percentages summing to exactly 100.
///
/// Each weight becomes `w / sum * 100` rounded to the nearest integer; the
/// rounding remainder is folded into the first element so the total is 100
/// no matter how the rounding falls, including a single dominant weight or
/// near-equal weights.
pub fn to_percents(weights: &[f64]) -> Vec<u8> {
    debug_assert!(weights.len() >= 2);
    let total: f64 = weights.iter().sum();
    let mut rounded: Vec<i32> =
        weights.iter().map(|w| (w / total * 100.0).round() as i32).collect();
    let diff = 100 - rounded.iter().sum::<i32>();
    if diff != 0 {
        rounded[0] += diff;
    }
    debug_assert_eq!(rounded.iter().sum::<i32>(), 100);
    rounded.into_iter().map(|v| v as u8).collect()
}

fn two_way_market(seed: i64, offsets: (i64, i64), spans: (f64, f64, f64, f64)) -> (f64, f64) {
    let (base_a, span_a, base_b, span_b) = spans;
    let a = base_a + seeded_random((seed + offsets.0) as f64) * span_a;
    let b = base_b + seeded_random((seed + offsets.1) as f64) * span_b;
    (a, b)
}

fn picks_from_odds(labels: &[&str], odds: &[f64]) -> Vec<MarketPick> {
    let inverse: Vec<f64> = odds.iter().map(|o| 1.0 / o).collect();
    let percents = to_percents(&inverse);
    labels
        .iter()
        .zip(odds.iter())
        .zip(percents)
        .map(|((label, odd), percent)| MarketPick {
            label: (*label).to_string(),
            odd: *odd,
            percent,
        })
        .collect()
}

/// Build the full market table for a match, anchored on the current score
/// (zero-zero for upcoming fixtures).
pub fn market_table(seed: i64, home_score: u8, away_score: u8) -> MarketTable {
    let w1 = 1.3 + seeded_random((seed + 600) as f64) * 2.5;
    let wx = 2.8 + seeded_random((seed + 700) as f64) * 1.5;
    let w2 = 2.0 + seeded_random((seed + 800) as f64) * 3.0;

    let (w_over, w_under) =
        two_way_market(seed, (1000, 1100), (1.5, 1.2, 1.6, 1.3));
    let (w_yes, w_no) = two_way_market(seed, (1200, 1300), (1.4, 1.5, 1.9, 0.8));

    let cs_labels = [
        format!("{}-{}", home_score, away_score),
        format!("{}-{}", home_score + 1, away_score),
        format!("{}-{}", home_score, away_score + 1),
    ];
    let cs_odds = [
        6.0 + seeded_random((seed + 1500) as f64) * 10.0,
        7.0 + seeded_random((seed + 1600) as f64) * 8.0,
        8.0 + seeded_random((seed + 1700) as f64) * 7.0,
    ];
    let cs_label_refs: Vec<&str> = cs_labels.iter().map(String::as_str).collect();

    MarketTable {
        one_x_two: picks_from_odds(&["Win", "Draw", "Lose"], &[w1, wx, w2]),
        over_under: picks_from_odds(&["Over", "Under"], &[w_over, w_under]),
        both_teams_to_score: picks_from_odds(&["Yes", "No"], &[w_yes, w_no]),
        correct_score: picks_from_odds(&cs_label_refs, &cs_odds),
    }
}

/// Live/upcoming presentation state shared by the match generators.
struct Presentation {
    minute: Option<u8>,
    period: Option<Period>,
    home_score: u8,
    away_score: u8,
    momentum: u8,
    time_label: String,
}

fn presentation(seed: i64) -> Presentation {
    let is_live = seeded_random((seed + 200) as f64) > 0.4;
    let minute = is_live.then(|| (seeded_random((seed + 300) as f64) * 90.0) as u8 + 1);
    let period = minute.map(Period::for_minute);
    let home_score =
        if is_live { (seeded_random((seed + 400) as f64) * 5.0) as u8 } else { 0 };
    let away_score =
        if is_live { (seeded_random((seed + 500) as f64) * 5.0) as u8 } else { 0 };
    let momentum = (seeded_random((seed + 900) as f64) * 80.0) as u8 + 10;
    let time_label = match minute {
        Some(m) => format!("Live {}'", m),
        None => pick(&KICKOFF_LABELS, (seed + 1400) as f64).to_string(),
    };
    Presentation { minute, period, home_score, away_score, momentum, time_label }
}

fn crest_index(seed: i64) -> u8 {
    seed.rem_euclid(6) as u8
}

/// Generate one fixture with markets from a numeric id and seed.
pub fn generate_match(id: u32, seed: i64) -> GeneratedMatch {
    let names = candidate_names(seed);
    let (home_name, away_name) =
        pick_pairing(&names, seed).expect("candidate pool always has two names");
    let league = pick(&LEAGUES, (seed + 100) as f64).to_string();
    let p = presentation(seed);

    GeneratedMatch {
        id: id.to_string(),
        home_name,
        away_name,
        league,
        minute: p.minute,
        period: p.period,
        home_score: p.home_score,
        away_score: p.away_score,
        momentum: p.momentum,
        time_label: p.time_label,
        crest_home: crest_index(seed),
        crest_away: crest_index(seed + 1),
        markets: market_table(seed, p.home_score, p.away_score),
    }
}

/// Generate a batch of fixtures with ids `1..=count`.
pub fn generate_matches(count: u32, base_seed: i64) -> Vec<GeneratedMatch> {
    (0..count)
        .map(|i| generate_match(i + 1, base_seed + i as i64 * BATCH_SEED_STRIDE))
        .collect()
}

/// Generate a fixture hosted by the user's own team against a procedural
/// opponent. The seed is personalised by the team name so two teams browsing
/// at the same moment see different cards.
pub fn generate_match_for_home_team(home_name: &str, seed: i64) -> GeneratedMatch {
    let names = candidate_names(seed);
    let candidates: Vec<&String> = names.iter().filter(|n| n.as_str() != home_name).collect();
    let away_name = if candidates.is_empty() {
        names[0].clone()
    } else {
        candidates[pick_index((seed + 999) as f64, candidates.len())].clone()
    };

    let s = seed + home_name.encode_utf16().count() as i64 * 111;
    let league = pick(&LEAGUES, (s + 100) as f64).to_string();
    let p = presentation(s);

    GeneratedMatch {
        id: format!("my_{}_{}", home_name.replace(' ', "_"), seed),
        home_name: home_name.to_string(),
        away_name,
        league,
        minute: p.minute,
        period: p.period,
        home_score: p.home_score,
        away_score: p.away_score,
        momentum: p.momentum,
        time_label: p.time_label,
        crest_home: crest_index(s),
        crest_away: crest_index(s + 1),
        markets: market_table(s, p.home_score, p.away_score),
    }
}
