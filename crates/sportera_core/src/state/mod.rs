//! In-memory session state.
//!
//! `SessionState` owns everything the companion apps persist per user: the
//! roster of managed teams, their records and training, cooldown gates, and
//! the match history. The collaborator constructs one instance, threads it
//! through explicitly, and serializes the whole value for durable storage;
//! there is no global singleton in this crate. Derived scalars (strength,
//! leadership, rating) are recomputed from the stored counters on every
//! read.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, Result};
use crate::models::{BoxScore, MatchOutcome, SideStats, TeamRecord};
use crate::naming::generate_opponents;
use crate::rng::pick_index;
use crate::training::{self, TrainingBlock, TrainingState};

/// Opponent pool size mixed into fixture picking.
const FIXTURE_OPPONENT_POOL: usize = 20;

/// One row of the match history, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    /// The owned team whose perspective this row records.
    pub team: String,
    pub opponent: String,
    pub home_score: u8,
    pub away_score: u8,
    pub outcome: MatchOutcome,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub box_score: Option<BoxScore>,
    pub date: DateTime<Utc>,
}

/// One side of a picked fixture, ready to feed the simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureTeam {
    pub name: String,
    pub stats: SideStats,
    pub leadership: u8,
    pub is_user: bool,
}

/// All mutable per-user state of the companion apps.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionState {
    teams: Vec<String>,
    records: HashMap<String, TeamRecord>,
    training: HashMap<String, TrainingState>,
    cooldowns: HashMap<String, DateTime<Utc>>,
    match_history: Vec<MatchRecord>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_names(&self) -> &[String] {
        &self.teams
    }

    pub fn record(&self, team: &str) -> Option<&TeamRecord> {
        self.records.get(team)
    }

    pub fn training(&self, team: &str) -> Option<&TrainingState> {
        self.training.get(team)
    }

    pub fn match_history(&self) -> &[MatchRecord] {
        &self.match_history
    }

    /// Derived strength of an owned team, recomputed from the live record
    /// and training state.
    pub fn strength_of(&self, team: &str) -> Option<u8> {
        let record = self.records.get(team)?;
        let training = self.training.get(team).copied().unwrap_or_default();
        Some(record.strength(&training))
    }

    /// Add a team. Blank names and case-insensitive duplicates are rejected
    /// and leave the roster untouched.
    pub fn add_team(&mut self, name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CoreError::BlankTeamName);
        }
        if self.teams.iter().any(|t| t.eq_ignore_ascii_case(trimmed)) {
            return Err(CoreError::DuplicateTeam { name: trimmed.to_string() });
        }
        self.teams.push(trimmed.to_string());
        self.records.insert(trimmed.to_string(), TeamRecord::new(trimmed));
        self.training.insert(trimmed.to_string(), TrainingState::default());
        log::info!("added team {trimmed}");
        Ok(())
    }

    /// Remove a team and every piece of state keyed by it.
    pub fn remove_team(&mut self, name: &str) {
        self.teams.retain(|t| t != name);
        self.records.remove(name);
        self.training.remove(name);
        self.cooldowns.remove(name);
    }

    /// Record a finished match from `team`'s perspective: exactly one of
    /// wins/draws/losses is incremented and goals are added as seen from
    /// `team`'s bench. When both sides are owned, call once per side with
    /// the swapped result for the second call.
    pub fn record_match(
        &mut self,
        team: &str,
        opponent: &str,
        home_score: u8,
        away_score: u8,
        outcome: MatchOutcome,
        box_score: Option<BoxScore>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let record = self
            .records
            .get_mut(team)
            .ok_or_else(|| CoreError::UnknownTeam { name: team.to_string() })?;
        record.apply_result(outcome, home_score, away_score);
        self.match_history.insert(
            0,
            MatchRecord {
                id: Uuid::new_v4().to_string(),
                team: team.to_string(),
                opponent: opponent.to_string(),
                home_score,
                away_score,
                outcome,
                box_score,
                date: now,
            },
        );
        Ok(())
    }

    /// Train one block of a team. On cooldown the call is rejected and
    /// nothing changes, including the gate timestamp; otherwise a seeded
    /// `1..=3` gain is applied (clamped at the block cap) and the gate is
    /// armed for 60 seconds. Returns the applied gain.
    pub fn train(
        &mut self,
        team: &str,
        block: TrainingBlock,
        seed: u64,
        now: DateTime<Utc>,
    ) -> Result<u8> {
        if !self.records.contains_key(team) {
            return Err(CoreError::UnknownTeam { name: team.to_string() });
        }
        let gate = self.cooldowns.get(team).copied();
        if !training::is_ready(gate, now) {
            return Err(CoreError::TrainingCooldown {
                ready_at: gate.expect("cooldown rejection implies a stored gate"),
            });
        }
        let training_state = self.training.entry(team.to_string()).or_default();
        let gain = training_state.apply_gain(block, training::roll_gain(seed));
        self.cooldowns.insert(team.to_string(), training::next_eligible_at(now));
        log::debug!("trained {team} {} +{gain}", block.display_name());
        Ok(gain)
    }

    /// When the team may train again; `None` if it never trained.
    pub fn next_training_at(&self, team: &str) -> Option<DateTime<Utc>> {
        self.cooldowns.get(team).copied()
    }

    /// Teams ordered by rating, best first; ties break alphabetically so the
    /// board is stable between reads.
    pub fn leaderboard(&self) -> Vec<(String, u32)> {
        let mut rows: Vec<(String, u32)> = self
            .teams
            .iter()
            .filter_map(|name| self.records.get(name).map(|r| (name.clone(), r.rating())))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }

    /// Pick two distinct sides for a casual fixture from the pool of owned
    /// teams (live derived strength) and procedural opponents. `None` only
    /// when fewer than two candidates exist.
    pub fn pick_fixture(&self, seed: i64) -> Option<(FixtureTeam, FixtureTeam)> {
        let mut pool: Vec<FixtureTeam> = self
            .teams
            .iter()
            .filter_map(|name| {
                let record = self.records.get(name)?;
                let training = self.training.get(name).copied().unwrap_or_default();
                Some(FixtureTeam {
                    name: name.clone(),
                    stats: SideStats::for_team(record, &training),
                    leadership: record.leadership(),
                    is_user: true,
                })
            })
            .collect();
        pool.extend(generate_opponents(FIXTURE_OPPONENT_POOL, &self.teams, seed).iter().map(
            |profile| FixtureTeam {
                name: profile.name.clone(),
                stats: SideStats::from(profile),
                leadership: profile.leadership,
                is_user: false,
            },
        ));
        if pool.len() < 2 {
            return None;
        }
        let first = pick_index(seed as f64, pool.len());
        let mut bump = 1;
        let mut second = pick_index((seed + bump) as f64, pool.len());
        while second == first {
            bump += 1;
            second = pick_index((seed + bump) as f64, pool.len());
        }
        Some((pool[first].clone(), pool[second].clone()))
    }
}
