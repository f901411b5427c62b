//! Daily challenges - counters that reset at each new day and pay flat XP.
//!
//! `stay_calm` is a snapshot: its counter is recomputed from current stress
//! on every check instead of accumulating, so it pays out on every check
//! while stress stays at or below the limit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::notify::Outbox;
use crate::state::GameState;

/// Stress at or below this counts as calm.
pub const STAY_CALM_STRESS_LIMIT: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChallengeId {
    ReadBooks,
    CollectCoins,
    AttendClass,
    StayCalm,
}

impl ChallengeId {
    pub const ALL: [ChallengeId; 4] = [
        ChallengeId::ReadBooks,
        ChallengeId::CollectCoins,
        ChallengeId::AttendClass,
        ChallengeId::StayCalm,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ChallengeId::ReadBooks => "read_books",
            ChallengeId::CollectCoins => "collect_coins",
            ChallengeId::AttendClass => "attend_class",
            ChallengeId::StayCalm => "stay_calm",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ChallengeId::ALL.iter().copied().find(|c| c.key() == key)
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChallengeId::ReadBooks => "Read 3 books",
            ChallengeId::CollectCoins => "Collect 10 coins",
            ChallengeId::AttendClass => "Complete 2 courses",
            ChallengeId::StayCalm => "Keep stress at or below 30",
        }
    }

    /// `(target, reward_xp)`.
    fn rules(&self) -> (u32, u32) {
        match self {
            ChallengeId::ReadBooks => (3, 15),
            ChallengeId::CollectCoins => (10, 10),
            ChallengeId::AttendClass => (2, 20),
            ChallengeId::StayCalm => (1, 5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub target: u32,
    pub current: u32,
    pub reward: u32,
}

impl Challenge {
    fn new(id: ChallengeId) -> Self {
        let (target, reward) = id.rules();
        Self {
            target,
            current: 0,
            reward,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.target
    }
}

/// Today's challenge counters and the day they were last reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenges {
    challenges: BTreeMap<ChallengeId, Challenge>,
    last_reset_day: u32,
}

impl DailyChallenges {
    pub fn new(day: u32) -> Self {
        Self {
            challenges: ChallengeId::ALL
                .iter()
                .map(|id| (*id, Challenge::new(*id)))
                .collect(),
            last_reset_day: day,
        }
    }

    pub fn get(&self, id: ChallengeId) -> Challenge {
        self.challenges
            .get(&id)
            .copied()
            .unwrap_or_else(|| Challenge::new(id))
    }

    pub fn last_reset_day(&self) -> u32 {
        self.last_reset_day
    }

    /// Add progress to an accumulating challenge.
    pub fn record(&mut self, id: ChallengeId, amount: u32) {
        let entry = self.entry(id);
        entry.current = entry.current.saturating_add(amount);
    }

    /// Zero every counter once `day` has moved past the last reset.
    pub fn refresh_for_day(&mut self, day: u32) -> bool {
        if day <= self.last_reset_day {
            return false;
        }
        for challenge in self.challenges.values_mut() {
            challenge.current = 0;
        }
        self.last_reset_day = day;
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChallengeId, Challenge)> + '_ {
        self.challenges.iter().map(|(id, c)| (*id, *c))
    }

    fn entry(&mut self, id: ChallengeId) -> &mut Challenge {
        self.challenges
            .entry(id)
            .or_insert_with(|| Challenge::new(id))
    }
}

/// Pay out every challenge that reached its target and zero its counter.
pub fn check_challenges(state: &mut GameState, out: &mut Outbox) -> Vec<ChallengeId> {
    let calm = u32::from(state.stats.stress() <= STAY_CALM_STRESS_LIMIT);
    state.challenges.entry(ChallengeId::StayCalm).current = calm;

    let mut completed = Vec::new();
    for id in ChallengeId::ALL {
        let challenge = state.challenges.entry(id);
        if !challenge.is_complete() {
            continue;
        }
        challenge.current = 0;
        let reward = challenge.reward;
        log::debug!("Daily challenge {} complete", id.key());
        state.add_xp(reward, out);
        out.toast(format!("Challenge complete: {} (+{} XP)", id.description(), reward));
        completed.push(id);
    }
    if !completed.is_empty() {
        out.rebuild();
    }
    completed
}
