//! Game constants - stat bounds, tick timing, rewards, thresholds.
//!
//! Plain numeric constants grouped by concern. Both the engine crate and the
//! headless simtest read these.

pub mod stat_bounds {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;
}

pub mod timing {
    /// Ticks per second of wall time (one tick per rendered frame).
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Ticks in one time-of-day period (10 seconds of play).
    pub const TICKS_PER_PERIOD: u32 = 600;
    /// Periods in one day.
    pub const PERIODS_PER_DAY: u32 = 4;
    pub const FIRST_DAY: u32 = 1;
}

pub mod decay {
    /// Floor of the discipline dampening factor.
    pub const MIN_DISCIPLINE_FACTOR: f64 = 0.3;
    /// Discipline value at which the factor bottoms out linearly.
    pub const DISCIPLINE_SCALE: f64 = 150.0;
    /// Base stress gained per tick.
    pub const STRESS_PER_TICK: f64 = 0.5;
    /// Stress above this compounds faster.
    pub const HIGH_STRESS: f64 = 70.0;
    pub const HIGH_STRESS_MULTIPLIER: f64 = 1.5;
    /// Resistance removed per stress-resistance upgrade level.
    pub const RESISTANCE_PER_LEVEL: f64 = 0.15;
    pub const KNOWLEDGE_DECAY_DISCIPLINE: f64 = 30.0;
    pub const KNOWLEDGE_DECAY_RATE: f64 = 0.2;
    pub const REPUTATION_DECAY_DISCIPLINE: f64 = 40.0;
    pub const REPUTATION_DECAY_RATE: f64 = 0.1;
}

pub mod xp {
    pub const ORIENTATION: u32 = 10;
    pub const COURSE: u32 = 5;
    pub const FIRST_CLASS: u32 = 10;
    pub const STUDENT_ID: u32 = 15;
    pub const LIBRARY_CARD: u32 = 20;
    pub const FIRST_MEAL: u32 = 5;
    pub const DORM_STUDY: u32 = 10;
    pub const READ_BOOK: u32 = 2;
    pub const VICTORY: u32 = 100;
}

pub mod energy {
    /// Minimum energy to collect the student ID or register at the library.
    pub const ERRAND_MIN: f64 = 10.0;
    pub const ERRAND_COST: f64 = 10.0;
    /// Minimum energy (and cost) to read a book.
    pub const READING_MIN: f64 = 15.0;
    pub const READING_COST: f64 = 15.0;
    /// Repeat meals only restore energy below this ceiling (no upgrade).
    pub const REPEAT_MEAL_BELOW: f64 = 80.0;
    pub const REPEAT_MEAL_RESTORE: f64 = 30.0;
    /// Ceiling raise per energy upgrade level.
    pub const CEILING_PER_LEVEL: f64 = 5.0;
}

pub mod events {
    /// Chance per eligible tick that a random event fires.
    pub const TRIGGER_CHANCE: f64 = 0.05;
    /// Ticks to wait after an event before rolling again (5 seconds).
    pub const COOLDOWN_TICKS: u32 = 300;
    pub const STRESS_RELIEF_ABOVE: f64 = 60.0;
    pub const STUDY_OPPORTUNITY_BELOW: f64 = 40.0;
    pub const ENERGY_BOOST_BELOW: f64 = 50.0;
    pub const STRESS_RELIEF_AMOUNT: f64 = 10.0;
    pub const STUDY_KNOWLEDGE: i32 = 5;
    pub const ENERGY_BOOST_AMOUNT: f64 = 15.0;
    pub const COIN_BONUS_MIN: u32 = 2;
    pub const COIN_BONUS_MAX: u32 = 5;
}

pub mod movement {
    pub const BASE_SPEED: f32 = 3.0;
    /// Coin pickup radius in map pixels before magnet upgrades.
    pub const BASE_PICKUP_RADIUS: f32 = 24.0;
    pub const PICKUP_RADIUS_PER_LEVEL: f32 = 8.0;
}
