//! Campus engine - main entry point for running a game session

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use campus_logic::catalog::{DepartmentId, SchoolId};
use campus_logic::progression::Rank;
use campus_logic::stats::StatKind;

use crate::config::{ConfigError, GameConfig};
use crate::notify::{Notification, Outbox};
use crate::state::GameState;
use crate::systems::*;

/// What happened during one [`CampusEngine::tick`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Ticks run so far, including this one.
    pub tick: u64,
    /// The time of day changed.
    pub time_changed: bool,
    /// A new day started.
    pub day_changed: bool,
    /// Daily challenge counters were reset.
    pub daily_reset: bool,
    pub achievement: Option<AchievementId>,
    pub challenges_completed: Vec<ChallengeId>,
    pub event: Option<RandomEvent>,
}

/// Owns the game state, the event RNG, and the notification outbox.
///
/// Call [`tick`](Self::tick) once per rendered frame and drain
/// notifications afterwards.
pub struct CampusEngine {
    pub state: GameState,
    config: GameConfig,
    rng: StdRng,
    outbox: Outbox,
    ticks: u64,
}

impl CampusEngine {
    /// Start a new game. Seeds the RNG from `config.seed` when present.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        log::info!(
            "New campus game: {} ticks per period, event chance {}",
            config.ticks_per_period,
            config.event_chance
        );
        Ok(Self {
            state: GameState::new(&config),
            config,
            rng,
            outbox: Outbox::new(),
            ticks: 0,
        })
    }

    /// Standard rules with a fixed RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        let config = GameConfig {
            seed: Some(seed),
            ..Default::default()
        };
        Self {
            state: GameState::new(&config),
            config,
            rng: StdRng::seed_from_u64(seed),
            outbox: Outbox::new(),
            ticks: 0,
        }
    }

    /// Advance the game by one frame.
    pub fn tick(&mut self) -> TickReport {
        self.ticks += 1;
        let day_before = self.state.time.day();

        decay_system(&mut self.state);
        let time_changed = self.state.time.advance(1);
        let day_changed = self.state.time.day() != day_before;
        if day_changed {
            log::info!("Day {} begins", self.state.time.day());
        }

        let daily_reset = self.state.challenges.refresh_for_day(self.state.time.day());
        if daily_reset {
            self.outbox.toast("New day! Daily challenges reset");
        }

        let achievement = check_achievements(&mut self.state, &mut self.outbox);
        let challenges_completed = check_challenges(&mut self.state, &mut self.outbox);
        let event = tick_events(&mut self.state, &self.config, &mut self.rng, &mut self.outbox);

        if time_changed || day_changed {
            self.outbox.rebuild();
        }

        TickReport {
            tick: self.ticks,
            time_changed,
            day_changed,
            daily_reset,
            achievement,
            challenges_completed,
            event,
        }
    }

    /// Run `n` ticks and return the last report.
    pub fn run_ticks(&mut self, n: u32) -> Option<TickReport> {
        (0..n).map(|_| self.tick()).last()
    }

    /// Throw away all progress and start over with the same config.
    pub fn reset(&mut self) {
        log::info!("Game reset after {} ticks", self.ticks);
        self.state = GameState::new(&self.config);
        if let Some(seed) = self.config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.outbox = Outbox::new();
        self.ticks = 0;
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.outbox.drain()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn time_display(&self) -> String {
        self.state.time_display()
    }

    pub fn rank(&self) -> Rank {
        self.state.rank()
    }

    pub fn stat(&self, kind: StatKind) -> f64 {
        self.state.stat(kind)
    }

    pub fn all_quests_done(&self) -> bool {
        self.state.all_quests_done()
    }

    /// Grant XP from outside the game rules, e.g. a debug menu.
    pub fn add_xp(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.outbox.toast(format!("+{} XP", amount));
        self.state.add_xp(amount, &mut self.outbox);
    }

    pub fn add_item(&mut self, name: &str) -> bool {
        self.state.add_item(name, &mut self.outbox)
    }

    // ── Academic track ──────────────────────────────────────────────────

    pub fn choose_school(&mut self, school: SchoolId) -> ActionOutcome {
        choose_school(&mut self.state, &mut self.outbox, school)
    }

    pub fn attend_orientation(&mut self) -> ActionOutcome {
        attend_orientation(&mut self.state, &mut self.outbox)
    }

    pub fn complete_next_core_course(&mut self) -> ActionOutcome {
        complete_next_core_course(&mut self.state, &mut self.outbox)
    }

    pub fn choose_department(&mut self, department: DepartmentId) -> ActionOutcome {
        choose_department(&mut self.state, &mut self.outbox, department)
    }

    pub fn complete_next_department_course(&mut self) -> ActionOutcome {
        complete_next_department_course(&mut self.state, &mut self.outbox)
    }

    pub fn attend_first_class(&mut self) -> ActionOutcome {
        attend_first_class(&mut self.state, &mut self.outbox)
    }

    pub fn collect_student_id(&mut self) -> ActionOutcome {
        collect_student_id(&mut self.state, &mut self.outbox)
    }

    pub fn collect_timetable(&mut self) -> ActionOutcome {
        collect_timetable(&mut self.state, &mut self.outbox)
    }

    pub fn register_library_card(&mut self) -> ActionOutcome {
        register_library_card(&mut self.state, &mut self.outbox)
    }

    // ── Activities ──────────────────────────────────────────────────────

    pub fn sleep(&mut self) -> ActionOutcome {
        sleep(&mut self.state, &mut self.outbox)
    }

    pub fn dorm_study(&mut self) -> ActionOutcome {
        dorm_study(&mut self.state, &mut self.outbox)
    }

    pub fn take_dorm_key(&mut self) -> ActionOutcome {
        take_dorm_key(&mut self.state, &mut self.outbox)
    }

    pub fn collect_meal_coupon(&mut self) -> ActionOutcome {
        collect_meal_coupon(&mut self.state, &mut self.outbox)
    }

    pub fn eat_meal(&mut self) -> ActionOutcome {
        eat_meal(&mut self.state, &mut self.outbox)
    }

    pub fn read_book(&mut self, title: &str) -> ActionOutcome {
        read_book(&mut self.state, &mut self.outbox, title)
    }

    pub fn visit_city(&mut self) -> ActionOutcome {
        visit_city(&mut self.state, &mut self.outbox)
    }

    pub fn enter_building(&mut self, key: &str) -> bool {
        enter_building(&self.state, &mut self.outbox, key)
    }

    pub fn collect_coin(&mut self, amount: u32) {
        collect_coin(&mut self.state, &mut self.outbox, amount);
    }

    // ── Shop ────────────────────────────────────────────────────────────

    /// Buy the next level of an upgrade by map key. Refusals are toasted
    /// with the error text.
    pub fn purchase_upgrade(&mut self, key: &str) -> Result<PurchaseReceipt, UpgradeError> {
        match purchase(&mut self.state, key) {
            Ok(receipt) => {
                self.outbox.toast(format!(
                    "Purchased {} (level {})",
                    receipt.upgrade.name(),
                    receipt.new_level
                ));
                self.outbox.rebuild();
                Ok(receipt)
            }
            Err(err) => {
                log::debug!("Purchase of {} refused: {}", key, err);
                self.outbox.toast(err.to_string());
                Err(err)
            }
        }
    }
}

impl Default for CampusEngine {
    fn default() -> Self {
        Self::with_seed(0)
    }
}
