//! Day / time-of-day cycle and building opening hours.
//!
//! Time advances in ticks. Every `ticks_per_period` ticks (600 by default,
//! ten seconds at 60 FPS) the period steps Morning → Afternoon → Evening →
//! Night → Morning, and wrapping past Night starts a new day. Leftover ticks
//! carry over to the next call.

use serde::{Deserialize, Serialize};

use crate::constants::timing;

/// One of the four time-of-day phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    pub fn index(&self) -> u32 {
        match self {
            TimeOfDay::Morning => 0,
            TimeOfDay::Afternoon => 1,
            TimeOfDay::Evening => 2,
            TimeOfDay::Night => 3,
        }
    }

    /// Period for an index, wrapping modulo 4.
    pub fn from_index(index: u64) -> Self {
        match index % u64::from(timing::PERIODS_PER_DAY) {
            0 => TimeOfDay::Morning,
            1 => TimeOfDay::Afternoon,
            2 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }
}

/// Campus locations the player can enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Building {
    Dorm,
    Classroom,
    Library,
    Cafeteria,
    Admin,
    City,
}

impl Building {
    pub const ALL: [Building; 6] = [
        Building::Dorm,
        Building::Classroom,
        Building::Library,
        Building::Cafeteria,
        Building::Admin,
        Building::City,
    ];

    /// Parse the map key used by the presentation layer.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "dorm" => Some(Building::Dorm),
            "classroom" => Some(Building::Classroom),
            "library" => Some(Building::Library),
            "cafeteria" => Some(Building::Cafeteria),
            "admin" => Some(Building::Admin),
            "city" => Some(Building::City),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Building::Dorm => "dorm",
            Building::Classroom => "classroom",
            Building::Library => "library",
            Building::Cafeteria => "cafeteria",
            Building::Admin => "admin",
            Building::City => "city",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Building::Dorm => "Dormitory",
            Building::Classroom => "Classroom",
            Building::Library => "Library",
            Building::Cafeteria => "Cafeteria",
            Building::Admin => "Admin Office",
            Building::City => "City",
        }
    }

    /// Opening hours table.
    pub fn is_open(&self, period: TimeOfDay) -> bool {
        match self {
            Building::Cafeteria | Building::Library | Building::Classroom => {
                period != TimeOfDay::Night
            }
            Building::Admin => matches!(period, TimeOfDay::Morning | TimeOfDay::Afternoon),
            Building::Dorm | Building::City => true,
        }
    }
}

/// Whether the building with map key `key` can be entered during `period`.
/// Keys without an entry in the table are always accessible.
pub fn can_access_building(key: &str, period: TimeOfDay) -> bool {
    Building::from_key(key).map_or(true, |b| b.is_open(period))
}

/// Current day, period, and ticks accumulated toward the next period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimeRecord")]
pub struct TimeState {
    day: u32,
    time_of_day: TimeOfDay,
    tick_accumulator: u32,
    ticks_per_period: u32,
}

#[derive(Deserialize)]
struct TimeRecord {
    day: u32,
    time_of_day: TimeOfDay,
    tick_accumulator: u32,
    ticks_per_period: u32,
}

impl TryFrom<TimeRecord> for TimeState {
    type Error = String;

    fn try_from(r: TimeRecord) -> Result<Self, Self::Error> {
        if r.ticks_per_period == 0 {
            return Err("ticks_per_period must be at least 1".into());
        }
        if r.tick_accumulator >= r.ticks_per_period {
            return Err(format!(
                "tick_accumulator {} must be below ticks_per_period {}",
                r.tick_accumulator, r.ticks_per_period
            ));
        }
        if r.day < timing::FIRST_DAY {
            return Err(format!("day must be at least {}", timing::FIRST_DAY));
        }
        Ok(Self {
            day: r.day,
            time_of_day: r.time_of_day,
            tick_accumulator: r.tick_accumulator,
            ticks_per_period: r.ticks_per_period,
        })
    }
}

impl Default for TimeState {
    fn default() -> Self {
        Self::new(timing::TICKS_PER_PERIOD)
    }
}

impl TimeState {
    /// Day 1, Morning. `ticks_per_period` of zero is treated as one.
    pub fn new(ticks_per_period: u32) -> Self {
        Self {
            day: timing::FIRST_DAY,
            time_of_day: TimeOfDay::Morning,
            tick_accumulator: 0,
            ticks_per_period: ticks_per_period.max(1),
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    pub fn tick_accumulator(&self) -> u32 {
        self.tick_accumulator
    }

    pub fn ticks_per_period(&self) -> u32 {
        self.ticks_per_period
    }

    /// Accumulate `ticks`; each full period advances the cycle.
    ///
    /// Returns `true` when the time of day differs from before the call.
    /// A call spanning exactly a whole day lands on the same period and
    /// returns `false` even though the day counter moved.
    pub fn advance(&mut self, ticks: u32) -> bool {
        let before = self.time_of_day;
        let per_period = u64::from(self.ticks_per_period);
        let total = u64::from(self.tick_accumulator) + u64::from(ticks);
        let periods_passed = total / per_period;
        // remainder < ticks_per_period, which is a u32
        self.tick_accumulator = (total % per_period) as u32;

        if periods_passed > 0 {
            let index = u64::from(self.time_of_day.index()) + periods_passed;
            let days_passed = index / u64::from(timing::PERIODS_PER_DAY);
            let days_passed = u32::try_from(days_passed).unwrap_or(u32::MAX);
            self.day = self.day.saturating_add(days_passed);
            self.time_of_day = TimeOfDay::from_index(index);
        }

        self.time_of_day != before
    }

    pub fn is_time(&self, period: TimeOfDay) -> bool {
        self.time_of_day == period
    }

    pub fn can_access_building(&self, key: &str) -> bool {
        can_access_building(key, self.time_of_day)
    }

    /// HUD text, e.g. `"Day 3 - Evening"`.
    pub fn display(&self) -> String {
        format!("Day {} - {}", self.day, self.time_of_day.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_period() {
        let mut time = TimeState::default();
        assert!(time.advance(600));
        assert_eq!(time.time_of_day(), TimeOfDay::Afternoon);
        assert_eq!(time.tick_accumulator(), 0);
        assert_eq!(time.day(), 1);
    }

    #[test]
    fn test_full_day_wraps() {
        let mut time = TimeState::default();
        let changed = time.advance(2400);
        assert!(!changed);
        assert_eq!(time.time_of_day(), TimeOfDay::Morning);
        assert_eq!(time.day(), 2);
    }

    #[test]
    fn test_remainder_carries() {
        let mut time = TimeState::default();
        assert!(!time.advance(599));
        assert_eq!(time.tick_accumulator(), 599);
        assert!(time.advance(1));
        assert_eq!(time.time_of_day(), TimeOfDay::Afternoon);
        assert_eq!(time.tick_accumulator(), 0);
    }

    #[test]
    fn test_single_ticks_reach_night_then_next_day() {
        let mut time = TimeState::default();
        for _ in 0..1800 {
            time.advance(1);
        }
        assert!(time.is_time(TimeOfDay::Night));
        assert_eq!(time.day(), 1);
        for _ in 0..600 {
            time.advance(1);
        }
        assert!(time.is_time(TimeOfDay::Morning));
        assert_eq!(time.day(), 2);
    }

    #[test]
    fn test_day_increment_from_evening() {
        let mut time = TimeState::default();
        time.advance(1200);
        assert_eq!(time.time_of_day(), TimeOfDay::Evening);
        // evening (2) + 3 periods = 5 -> one day, afternoon
        assert!(time.advance(1800 + 17));
        assert_eq!(time.day(), 2);
        assert_eq!(time.time_of_day(), TimeOfDay::Afternoon);
        assert_eq!(time.tick_accumulator(), 17);
    }

    #[test]
    fn test_many_days_at_once() {
        let mut time = TimeState::default();
        time.advance(2400 * 9 + 600);
        assert_eq!(time.day(), 10);
        assert_eq!(time.time_of_day(), TimeOfDay::Afternoon);
    }

    #[test]
    fn test_building_hours() {
        use TimeOfDay::*;
        for period in TimeOfDay::ALL {
            assert!(can_access_building("dorm", period));
            assert!(can_access_building("city", period));
            assert!(can_access_building("gym", period));
        }
        for key in ["cafeteria", "library", "classroom"] {
            assert!(can_access_building(key, Morning));
            assert!(can_access_building(key, Evening));
            assert!(!can_access_building(key, Night));
        }
        assert!(can_access_building("admin", Afternoon));
        assert!(!can_access_building("admin", Evening));
        assert!(!can_access_building("admin", Night));
    }

    #[test]
    fn test_display() {
        let mut time = TimeState::default();
        time.advance(2400 * 2 + 1200);
        assert_eq!(time.display(), "Day 3 - Evening");
    }

    #[test]
    fn test_zero_period_length_is_guarded() {
        let mut time = TimeState::new(0);
        assert!(time.advance(1));
        assert_eq!(time.time_of_day(), TimeOfDay::Afternoon);
    }

    #[test]
    fn test_building_keys_round_trip() {
        for b in Building::ALL {
            assert_eq!(Building::from_key(b.key()), Some(b));
        }
    }

    #[test]
    fn test_deserialize_rejects_broken_clock() {
        let zero = r#"{"day":1,"time_of_day":"Morning","tick_accumulator":0,"ticks_per_period":0}"#;
        assert!(serde_json::from_str::<TimeState>(zero).is_err());
        let overfull = r#"{"day":1,"time_of_day":"Morning","tick_accumulator":600,"ticks_per_period":600}"#;
        assert!(serde_json::from_str::<TimeState>(overfull).is_err());

        let mut time = TimeState::default();
        time.advance(1234);
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(serde_json::from_str::<TimeState>(&json).unwrap(), time);
    }
}
