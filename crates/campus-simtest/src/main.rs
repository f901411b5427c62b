//! Campus Headless Simulation Harness
//!
//! Validates progression logic and the bundled game config without a
//! renderer. Runs entirely in-process.
//!
//! Usage:
//!   cargo run -p campus-simtest
//!   cargo run -p campus-simtest -- --verbose
//!   RUST_LOG=info cargo run -p campus-simtest

use campus_core::prelude::*;
use campus_core::systems::STAY_CALM_STRESS_LIMIT;
use campus_logic::catalog;
use campus_logic::stats::{boosted_knowledge, PlayerStats};
use campus_logic::time::{Building, TimeState};
use tracing_subscriber::EnvFilter;

// ── Game config (the same JSON a frontend would ship) ───────────────────
const CONFIG_JSON: &str = include_str!("../../../data/game_config.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Campus Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Bundled config
    let config = validate_config(&mut results).unwrap_or_default();
    log::info!(
        "Harness config: {} ticks per period, seed {:?}",
        config.ticks_per_period,
        config.seed
    );

    // 2. Stat engine
    results.extend(validate_stats(verbose));

    // 3. Time cycle and opening hours
    results.extend(validate_time());

    // 4. Quest graph walkthrough
    results.extend(validate_quests());

    // 5. Achievements and daily challenges
    results.extend(validate_trackers());

    // 6. Upgrade economy
    results.extend(validate_upgrades());

    // 7. Random events
    results.extend(validate_events(verbose));

    // 8. Ten-day soak with a scripted student
    results.extend(validate_soak(&config, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Config ───────────────────────────────────────────────────────────

fn validate_config(results: &mut Vec<TestResult>) -> Option<GameConfig> {
    println!("--- Game Config ---");

    let config = match GameConfig::from_json_str(CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            results.push(check("config_parse", false, e.to_string()));
            return None;
        }
    };
    results.push(check("config_parse", true, "bundled config parses and validates"));

    results.push(check(
        "config_seeded",
        config.seed.is_some(),
        format!("seed = {:?}", config.seed),
    ));

    let bad = GameConfig::from_json_str(r#"{ "ticks_per_period": 0 }"#);
    results.push(check(
        "config_rejects_zero_period",
        matches!(bad, Err(ConfigError::Invalid { .. })),
        "ticks_per_period = 0 is rejected",
    ));

    Some(config)
}

// ── 2. Stat Engine ──────────────────────────────────────────────────────

fn validate_stats(verbose: bool) -> Vec<TestResult> {
    println!("--- Stat Engine ---");
    let mut results = Vec::new();

    // Clamp sweep across large positive and negative deltas
    let mut stats = PlayerStats::default();
    let mut out_of_range = 0;
    for step in -50..=50 {
        for kind in StatKind::ALL {
            stats.add(kind, f64::from(step) * 7.5);
            if !(0.0..=100.0).contains(&stats.get(kind)) {
                out_of_range += 1;
            }
        }
    }
    results.push(check(
        "stats_clamped",
        out_of_range == 0,
        format!("{} out-of-range readings over 505 mutations", out_of_range),
    ));

    results.push(check(
        "knowledge_boost_truncates",
        boosted_knowledge(10, 2) == 14 && boosted_knowledge(6, 2) == 8,
        format!(
            "10@2 -> {}, 6@2 -> {}",
            boosted_knowledge(10, 2),
            boosted_knowledge(6, 2)
        ),
    ));

    // Decay sweep by discipline
    for discipline in [0.0, 25.0, 50.0, 100.0] {
        let mut stats = PlayerStats::new(80.0, 60.0, 20.0, 60.0, discipline);
        for _ in 0..10_000 {
            stats.process_decay(0);
        }
        let ok = StatKind::ALL
            .iter()
            .all(|k| (0.0..=100.0).contains(&stats.get(*k)));
        if verbose {
            println!(
                "  discipline {:>5.1}: stress {:.1}, knowledge {:.1}, reputation {:.1}",
                discipline,
                stats.stress(),
                stats.knowledge(),
                stats.reputation()
            );
        }
        results.push(check(
            &format!("decay_in_range_d{}", discipline),
            ok && stats.stress() == 100.0,
            format!("stress saturates at {:.1}", stats.stress()),
        ));
    }

    results
}

// ── 3. Time Cycle ───────────────────────────────────────────────────────

fn validate_time() -> Vec<TestResult> {
    println!("--- Time Cycle ---");
    let mut results = Vec::new();

    let mut time = TimeState::new(600);
    let changed = time.advance(600);
    results.push(check(
        "time_one_period",
        changed && time.is_time(TimeOfDay::Afternoon) && time.tick_accumulator() == 0,
        time.display(),
    ));

    let mut time = TimeState::new(600);
    let changed = time.advance(2400);
    results.push(check(
        "time_full_day",
        !changed && time.is_time(TimeOfDay::Morning) && time.day() == 2,
        time.display(),
    ));

    let night_open: Vec<_> = Building::ALL
        .iter()
        .filter(|b| b.is_open(TimeOfDay::Night))
        .map(|b| b.key())
        .collect();
    results.push(check(
        "buildings_open_at_night",
        night_open == ["dorm", "city"],
        night_open.join(", "),
    ));

    results.push(check(
        "unknown_building_open",
        campus_logic::time::can_access_building("gym", TimeOfDay::Night),
        "unlisted keys are always accessible",
    ));

    results
}

// ── 4. Quest Graph ──────────────────────────────────────────────────────

fn validate_quests() -> Vec<TestResult> {
    println!("--- Quest Graph ---");
    let mut results = Vec::new();

    for school in SchoolId::ALL {
        for department in school.departments() {
            let mut engine = quiet_engine(1);
            walk_campus(&mut engine, school, department);
            results.push(check(
                &format!("walkthrough_{}_{}", school.key(), department.key()),
                engine.all_quests_done()
                    && engine.state.has_flag(Flag::VictoryAwarded)
                    && engine.state.academics.completed_courses().len() == 6,
                format!("xp {} rank {:?}", engine.state.xp, engine.rank()),
            ));

            // Every action is a no-op once done
            let xp = engine.state.xp;
            let snapshot = engine.state.clone();
            let repeats = [
                engine.choose_school(school),
                engine.attend_orientation(),
                engine.complete_next_core_course(),
                engine.choose_department(department),
                engine.complete_next_department_course(),
                engine.attend_first_class(),
                engine.collect_student_id(),
                engine.collect_timetable(),
                engine.register_library_card(),
            ];
            results.push(check(
                &format!("idempotent_{}_{}", school.key(), department.key()),
                repeats.iter().all(|o| *o == ActionOutcome::AlreadyDone)
                    && engine.state == snapshot,
                format!("xp stayed at {}", xp),
            ));
        }
    }

    // Department of the wrong school is refused
    let mut engine = quiet_engine(2);
    engine.choose_school(SchoolId::Civil);
    engine.attend_orientation();
    for _ in 0..3 {
        engine.complete_next_core_course();
    }
    results.push(check(
        "department_school_mismatch",
        engine.choose_department(DepartmentId::Computer) == ActionOutcome::PreconditionNotMet,
        "computer is not offered by civil",
    ));

    results
}

fn walk_campus(engine: &mut CampusEngine, school: SchoolId, department: DepartmentId) {
    engine.take_dorm_key();
    engine.collect_timetable();
    engine.collect_student_id();
    engine.register_library_card();
    engine.collect_meal_coupon();
    engine.eat_meal();
    engine.choose_school(school);
    engine.attend_orientation();
    engine.attend_first_class();
    for _ in 0..school.core_courses().len() {
        engine.complete_next_core_course();
    }
    engine.choose_department(department);
    for _ in 0..department.courses().len() {
        engine.complete_next_department_course();
    }
}

// ── 5. Trackers ─────────────────────────────────────────────────────────

fn validate_trackers() -> Vec<TestResult> {
    println!("--- Achievements & Challenges ---");
    let mut results = Vec::new();

    let mut engine = quiet_engine(3);
    engine.state.set_stat(StatKind::Stress, STAY_CALM_STRESS_LIMIT + 20.0);
    engine.collect_coin(9);
    let before = engine.tick().achievement;
    engine.collect_coin(1);
    let at_ten = engine.tick().achievement;
    let after = engine.tick().achievement;
    results.push(check(
        "coin_collector_once",
        before.is_none() && at_ten == Some(AchievementId::CoinCollector) && after.is_none(),
        format!("{:?} / {:?} / {:?}", before, at_ten, after),
    ));

    // collect_coins reached 10 on the second tick and paid out there
    let counter = engine.state.challenges.get(ChallengeId::CollectCoins).current;
    results.push(check(
        "collect_coins_paid",
        counter == 0 && engine.state.xp == 10,
        format!("counter {} xp {}", counter, engine.state.xp),
    ));

    let mut engine = quiet_engine(4);
    engine.state.set_stat(StatKind::Stress, STAY_CALM_STRESS_LIMIT + 20.0);
    engine.state.challenges.record(ChallengeId::ReadBooks, 2);
    engine.run_ticks(2399);
    let mid_day = engine.state.challenges.get(ChallengeId::ReadBooks).current;
    engine.tick();
    let next_day = engine.state.challenges.get(ChallengeId::ReadBooks).current;
    results.push(check(
        "daily_reset_at_rollover",
        mid_day == 2 && next_day == 0,
        format!("before {} after {}", mid_day, next_day),
    ));

    results
}

// ── 6. Upgrades ─────────────────────────────────────────────────────────

fn validate_upgrades() -> Vec<TestResult> {
    println!("--- Upgrade Economy ---");
    let mut results = Vec::new();

    for kind in UpgradeKind::ALL {
        let ladder = kind.cost_ladder();
        let mut engine = quiet_engine(5);
        let budget: u32 = ladder.iter().sum();
        engine.collect_coin(budget);

        let charged: Vec<u32> = (0..ladder.len())
            .filter_map(|_| engine.purchase_upgrade(kind.key()).ok())
            .map(|r| r.cost)
            .collect();
        let maxed = matches!(
            engine.purchase_upgrade(kind.key()),
            Err(UpgradeError::MaxLevel { .. })
        );
        results.push(check(
            &format!("ladder_{}", kind.key()),
            charged == ladder && maxed && engine.state.coins() == 0,
            format!("charged {:?}", charged),
        ));
    }

    let ceilings: Vec<f64> = (0..=UpgradeKind::Energy.max_level())
        .map(campus_logic::upgrades::energy_ceiling)
        .collect();
    results.push(check(
        "energy_ceiling_in_range",
        ceilings.windows(2).all(|w| w[0] < w[1])
            && ceilings.iter().all(|c| (0.0..=100.0).contains(c)),
        format!("{:?}", ceilings),
    ));

    let mut engine = quiet_engine(6);
    let err = engine.purchase_upgrade("teleporter");
    results.push(check(
        "unknown_upgrade",
        matches!(err, Err(UpgradeError::InvalidUpgrade(_))),
        "unknown keys are rejected",
    ));

    results
}

// ── 7. Events ───────────────────────────────────────────────────────────

fn validate_events(verbose: bool) -> Vec<TestResult> {
    println!("--- Random Events ---");
    let mut results = Vec::new();

    let mut engine = CampusEngine::with_seed(7);
    let mut fired = Vec::new();
    for _ in 0..60_000 {
        let report = engine.tick();
        if let Some(event) = report.event {
            fired.push((report.tick, event));
        }
    }
    let min_gap = fired
        .windows(2)
        .map(|w| w[1].0 - w[0].0)
        .min()
        .unwrap_or(u64::MAX);
    if verbose {
        for kind in EventKind::ALL {
            let count = fired.iter().filter(|(_, e)| e.kind == kind).count();
            println!("  {:18}: {}", kind.key(), count);
        }
    }
    results.push(check(
        "events_fire",
        !fired.is_empty(),
        format!("{} events in 60000 ticks", fired.len()),
    ));
    results.push(check(
        "events_respect_cooldown",
        min_gap > 300,
        format!("smallest gap {} ticks", min_gap),
    ));

    let replay: Vec<_> = {
        let mut engine = CampusEngine::with_seed(7);
        (0..60_000)
            .filter_map(|_| {
                let report = engine.tick();
                report.event.map(|e| (report.tick, e))
            })
            .collect()
    };
    results.push(check(
        "events_deterministic",
        replay == fired,
        "same seed, same events",
    ));

    results
}

// ── 8. Soak ─────────────────────────────────────────────────────────────

fn validate_soak(config: &GameConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Ten-Day Soak ---");
    let mut results = Vec::new();

    let mut engine = match CampusEngine::new(config.clone()) {
        Ok(engine) => engine,
        Err(e) => {
            results.push(check("soak_engine", false, e.to_string()));
            return results;
        }
    };

    let shelf = catalog::BOOK_SHELVES[0].1;
    let mut out_of_range = 0;
    let mut notifications = 0;
    let day_ticks = config.ticks_per_period * 4;
    for _ in 0..(day_ticks * 10) {
        let report = engine.tick();
        if report.time_changed {
            match engine.state.time.time_of_day() {
                TimeOfDay::Morning => {
                    engine.sleep();
                    engine.collect_coin(3);
                }
                TimeOfDay::Afternoon => {
                    if engine.enter_building("library") {
                        engine.register_library_card();
                        for title in shelf {
                            engine.read_book(title);
                        }
                    }
                }
                TimeOfDay::Evening => {
                    engine.collect_meal_coupon();
                    engine.eat_meal();
                    let _ = engine.purchase_upgrade("stress_resistance");
                }
                TimeOfDay::Night => {
                    engine.visit_city();
                }
            }
        }
        if StatKind::ALL
            .iter()
            .any(|k| !(0.0..=100.0).contains(&engine.stat(*k)))
        {
            out_of_range += 1;
        }
        notifications += engine.drain_notifications().len();
    }

    if verbose {
        println!(
            "  {} | xp {} | coins {} | books {} | achievements {}",
            engine.time_display(),
            engine.state.xp,
            engine.state.coins(),
            engine.state.books_read,
            engine.state.achievements.unlocked_count()
        );
    }

    results.push(check(
        "soak_stats_in_range",
        out_of_range == 0,
        format!("{} out-of-range ticks", out_of_range),
    ));
    results.push(check(
        "soak_reached_day_11",
        engine.state.time.day() == 11,
        engine.time_display(),
    ));
    results.push(check(
        "soak_veteran",
        engine.state.achievements.is_unlocked(AchievementId::Veteran),
        format!("{} achievements", engine.state.achievements.unlocked_count()),
    ));
    results.push(check(
        "soak_notified",
        notifications > 0,
        format!("{} notifications drained", notifications),
    ));

    results
}

fn quiet_engine(seed: u64) -> CampusEngine {
    let config = GameConfig {
        event_chance: 0.0,
        seed: Some(seed),
        ..Default::default()
    };
    match CampusEngine::new(config) {
        Ok(engine) => engine,
        Err(_) => CampusEngine::with_seed(seed),
    }
}
