//! The single game-state aggregate.
//!
//! Everything the game knows lives in one [`GameState`]. It is built from a
//! [`GameConfig`] and rebuilt from scratch on reset; nothing is reset
//! field by field.

use serde::{Deserialize, Serialize};

use campus_logic::constants::xp;
use campus_logic::progression::{AcademicStage, Flag, Quest, Rank};
use campus_logic::stats::{PlayerStats, StatKind};
use campus_logic::time::TimeState;
use campus_logic::upgrades::{self, UpgradeKind};

use crate::components::*;
use crate::config::GameConfig;
use crate::notify::Outbox;
use crate::systems::{AchievementLog, DailyChallenges, EventScheduler};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub stats: PlayerStats,
    pub time: TimeState,
    pub quests: QuestLog,
    pub flags: FlagSet,
    pub academics: AcademicProgress,
    pub achievements: AchievementLog,
    pub challenges: DailyChallenges,
    pub upgrades: UpgradeLevels,
    pub wallet: Wallet,
    pub events: EventScheduler,
    pub inventory: Inventory,
    pub movement: Movement,
    pub xp: u32,
    pub books_read: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        let time = TimeState::new(config.ticks_per_period);
        Self {
            stats: config.starting_stats.to_stats(),
            challenges: DailyChallenges::new(time.day()),
            time,
            quests: QuestLog::new(),
            flags: FlagSet::new(),
            academics: AcademicProgress::default(),
            achievements: AchievementLog::default(),
            upgrades: UpgradeLevels::default(),
            wallet: Wallet::new(config.starting_coins),
            events: EventScheduler::default(),
            inventory: Inventory::default(),
            movement: Movement::new(config.base_speed),
            xp: 0,
            books_read: 0,
        }
    }

    // ── Stats ───────────────────────────────────────────────────────────

    pub fn stat(&self, kind: StatKind) -> f64 {
        self.stats.get(kind)
    }

    pub fn set_stat(&mut self, kind: StatKind, value: f64) {
        self.stats.set(kind, value);
    }

    pub fn add_stat(&mut self, kind: StatKind, delta: f64) {
        self.stats.add(kind, delta);
    }

    /// Knowledge gain scaled by the knowledge-boost upgrade.
    pub fn add_knowledge(&mut self, delta: i32) -> i32 {
        let level = self.upgrades.level(UpgradeKind::KnowledgeBoost);
        self.stats.add_knowledge(delta, level)
    }

    /// Energy ceiling granted by the energy upgrade.
    pub fn energy_ceiling(&self) -> f64 {
        upgrades::energy_ceiling(self.upgrades.level(UpgradeKind::Energy))
    }

    pub fn coin_pickup_radius(&self) -> f32 {
        upgrades::coin_pickup_radius(self.upgrades.level(UpgradeKind::Magnet))
    }

    pub fn coins(&self) -> u32 {
        self.wallet.coins()
    }

    // ── XP, items, quests ───────────────────────────────────────────────

    /// Award XP. The caller's own toast names the amount.
    pub fn add_xp(&mut self, amount: u32, out: &mut Outbox) {
        if amount == 0 {
            return;
        }
        self.xp = self.xp.saturating_add(amount);
        out.rebuild();
    }

    pub fn rank(&self) -> Rank {
        Rank::for_xp(self.xp)
    }

    /// Add an inventory item, toasting only when it is new.
    pub fn add_item(&mut self, name: &str, out: &mut Outbox) -> bool {
        let added = self.inventory.add(name);
        if added {
            out.toast(format!("Item: {}", name));
            out.rebuild();
        }
        added
    }

    pub fn is_quest_done(&self, quest: Quest) -> bool {
        self.quests.is_done(quest)
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.is_set(flag)
    }

    /// Complete a quest and check for victory. Returns `false` if it was
    /// already done.
    pub fn complete_quest(&mut self, quest: Quest, out: &mut Outbox) -> bool {
        if !self.quests.complete(quest) {
            return false;
        }
        log::info!("Quest complete: {}", quest.key());
        self.check_victory(out);
        true
    }

    pub fn all_quests_done(&self) -> bool {
        self.quests.all_done()
    }

    /// Award the victory bonus the first time every quest is done.
    pub fn check_victory(&mut self, out: &mut Outbox) -> bool {
        if !self.all_quests_done() || !self.flags.raise(Flag::VictoryAwarded) {
            return false;
        }
        log::info!("All quests complete on day {}, awarding victory bonus", self.time.day());
        self.add_xp(xp::VICTORY, out);
        out.toast(format!("Campus conquered! All quests complete (+{} XP)", xp::VICTORY));
        true
    }

    /// Where the student stands in the academic state machine.
    pub fn academic_stage(&self) -> AcademicStage {
        if self.academics.school.is_none() {
            AcademicStage::NoSchool
        } else if self.quests.is_done(Quest::CompleteDepartmentCourses) {
            AcademicStage::DepartmentCoreDone
        } else if self.academics.department.is_some() {
            AcademicStage::DepartmentChosen
        } else if self.quests.is_done(Quest::CompleteProgramCourses) {
            AcademicStage::ProgramCoreDone
        } else if self.quests.is_done(Quest::ProgramOrientation) {
            AcademicStage::Oriented
        } else {
            AcademicStage::SchoolChosen
        }
    }

    // ── Time ────────────────────────────────────────────────────────────

    pub fn time_display(&self) -> String {
        self.time.display()
    }

    pub fn can_access_building(&self, key: &str) -> bool {
        self.time.can_access_building(key)
    }

    /// Snapshot for the presentation layer or debugging.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
