//! Achievement system - ordered one-shot predicates over the game state.

use serde::{Deserialize, Serialize};

use campus_logic::progression::Flag;

use crate::notify::Outbox;
use crate::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    FirstSteps,
    CoinCollector,
    CoinHoarder,
    CityExplorer,
    WellKnown,
    Scholar,
    Veteran,
}

impl AchievementId {
    pub const COUNT: usize = 7;

    /// Check order. Earlier entries win when several become true at once.
    pub const ALL: [AchievementId; AchievementId::COUNT] = [
        AchievementId::FirstSteps,
        AchievementId::CoinCollector,
        AchievementId::CoinHoarder,
        AchievementId::CityExplorer,
        AchievementId::WellKnown,
        AchievementId::Scholar,
        AchievementId::Veteran,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn key(&self) -> &'static str {
        match self {
            AchievementId::FirstSteps => "first_steps",
            AchievementId::CoinCollector => "coin_collector",
            AchievementId::CoinHoarder => "coin_hoarder",
            AchievementId::CityExplorer => "city_explorer",
            AchievementId::WellKnown => "well_known",
            AchievementId::Scholar => "scholar",
            AchievementId::Veteran => "veteran",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        AchievementId::ALL.iter().copied().find(|a| a.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AchievementId::FirstSteps => "First Steps",
            AchievementId::CoinCollector => "Coin Collector",
            AchievementId::CoinHoarder => "Coin Hoarder",
            AchievementId::CityExplorer => "City Explorer",
            AchievementId::WellKnown => "Well Known",
            AchievementId::Scholar => "Scholar",
            AchievementId::Veteran => "Veteran",
        }
    }

    pub fn is_met(&self, state: &GameState) -> bool {
        match self {
            AchievementId::FirstSteps => state.quests.any_done(),
            AchievementId::CoinCollector => state.coins() >= 10,
            AchievementId::CoinHoarder => state.coins() >= 50,
            AchievementId::CityExplorer => state.has_flag(Flag::VisitedCity),
            AchievementId::WellKnown => state.stats.reputation() >= 50.0,
            AchievementId::Scholar => state.stats.knowledge() >= 50.0,
            AchievementId::Veteran => state.time.day() >= 10,
        }
    }
}

/// Unlocked achievements. Entries never go back to locked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementLog {
    unlocked: [bool; AchievementId::COUNT],
}

impl AchievementLog {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked[id.index()]
    }

    fn unlock(&mut self, id: AchievementId) -> bool {
        let slot = &mut self.unlocked[id.index()];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.iter().filter(|u| **u).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AchievementId, bool)> + '_ {
        AchievementId::ALL
            .iter()
            .map(move |a| (*a, self.is_unlocked(*a)))
    }
}

/// Unlock at most one achievement: the first locked one whose predicate
/// now holds.
pub fn check_achievements(state: &mut GameState, out: &mut Outbox) -> Option<AchievementId> {
    let current: &GameState = state;
    let id = AchievementId::ALL
        .iter()
        .copied()
        .find(|a| !current.achievements.is_unlocked(*a) && a.is_met(current))?;
    state.achievements.unlock(id);
    log::info!("Achievement unlocked: {}", id.key());
    out.toast(format!("Achievement unlocked: {}", id.title()));
    out.rebuild();
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_logic::progression::Quest;
    use campus_logic::stats::StatKind;
    use crate::notify::Notification;

    #[test]
    fn test_nothing_at_start() {
        let mut state = GameState::default();
        let mut out = Outbox::new();
        assert_eq!(check_achievements(&mut state, &mut out), None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_coin_collector_once() {
        let mut state = GameState::default();
        let mut out = Outbox::new();
        state.wallet.earn(9);
        assert_eq!(check_achievements(&mut state, &mut out), None);
        state.wallet.earn(1);
        assert_eq!(
            check_achievements(&mut state, &mut out),
            Some(AchievementId::CoinCollector)
        );
        assert_eq!(check_achievements(&mut state, &mut out), None);
        assert!(state.achievements.is_unlocked(AchievementId::CoinCollector));
        assert_eq!(
            out.toasts().collect::<Vec<_>>(),
            vec!["Achievement unlocked: Coin Collector"]
        );
    }

    #[test]
    fn test_unlock_requests_rebuild() {
        let mut state = GameState::default();
        let mut out = Outbox::new();
        state.wallet.earn(10);
        check_achievements(&mut state, &mut out);
        assert_eq!(
            out.drain(),
            vec![
                Notification::Toast("Achievement unlocked: Coin Collector".into()),
                Notification::Rebuild,
            ]
        );
        assert_eq!(check_achievements(&mut state, &mut out), None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_one_per_check_in_order() {
        let mut state = GameState::default();
        let mut out = Outbox::new();
        state.complete_quest(Quest::Timetable, &mut out);
        state.wallet.earn(60);
        state.set_stat(StatKind::Knowledge, 75.0);

        let unlocked: Vec<_> = std::iter::from_fn(|| check_achievements(&mut state, &mut out))
            .collect();
        assert_eq!(
            unlocked,
            vec![
                AchievementId::FirstSteps,
                AchievementId::CoinCollector,
                AchievementId::CoinHoarder,
                AchievementId::Scholar,
            ]
        );
        assert_eq!(state.achievements.unlocked_count(), 4);
    }

    #[test]
    fn test_unlock_survives_predicate_loss() {
        let mut state = GameState::default();
        let mut out = Outbox::new();
        state.wallet.earn(10);
        check_achievements(&mut state, &mut out);
        state.wallet.spend(10);
        assert!(state.achievements.is_unlocked(AchievementId::CoinCollector));
        state.wallet.earn(10);
        assert_eq!(check_achievements(&mut state, &mut out), None);
    }

    #[test]
    fn test_keys_round_trip() {
        for id in AchievementId::ALL {
            assert_eq!(AchievementId::from_key(id.key()), Some(id));
        }
        assert_eq!(AchievementId::from_key("nope"), None);
    }
}
