//! Building activities: dorm, cafeteria, library, city, and coin pickup.

use campus_logic::catalog;
use campus_logic::constants::{energy, xp};
use campus_logic::progression::{Flag, Quest};
use campus_logic::stats::StatKind;
use campus_logic::time::Building;

use crate::notify::Outbox;
use crate::state::GameState;
use crate::systems::challenges::ChallengeId;
use crate::systems::quests::{require_energy, ActionOutcome};

// ── Dorm ────────────────────────────────────────────────────────────────

/// Full rest.
pub fn sleep(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    state.set_stat(StatKind::Energy, 100.0);
    out.toast("You feel rested. Energy restored!");
    out.rebuild();
    ActionOutcome::Applied
}

pub fn dorm_study(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    if !state.flags.raise(Flag::DormStudyDone) {
        return ActionOutcome::AlreadyDone;
    }
    state.add_xp(xp::DORM_STUDY, out);
    out.toast(format!("Studied in your room (+{} XP)", xp::DORM_STUDY));
    out.rebuild();
    ActionOutcome::Applied
}

pub fn take_dorm_key(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    if !state.flags.raise(Flag::DormKey) {
        return ActionOutcome::AlreadyDone;
    }
    state.add_item("Dorm Key", out);
    out.rebuild();
    ActionOutcome::Applied
}

// ── Cafeteria ───────────────────────────────────────────────────────────

pub fn collect_meal_coupon(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    if !state.flags.raise(Flag::MealCoupon) {
        return ActionOutcome::AlreadyDone;
    }
    state.add_item("Meal Coupon", out);
    out.rebuild();
    ActionOutcome::Applied
}

/// Eat at the cafeteria. The first meal completes the quest and fully
/// restores energy; later meals are a fixed top-up while energy is below
/// the upgrade's energy ceiling.
pub fn eat_meal(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    if !state.has_flag(Flag::MealCoupon) {
        return ActionOutcome::PreconditionNotMet;
    }

    if state.flags.raise(Flag::AteMeal) {
        state.set_stat(StatKind::Energy, 100.0);
        state.add_stat(StatKind::Stress, -5.0);
        state.add_stat(StatKind::Reputation, 2.0);
        state.add_xp(xp::FIRST_MEAL, out);
        state.complete_quest(Quest::EatMeal, out);
        out.toast(format!("First meal! Energy restored (+{} XP)", xp::FIRST_MEAL));
        out.rebuild();
        return ActionOutcome::Applied;
    }

    if state.stats.energy() >= state.energy_ceiling() {
        log::debug!("Repeat meal skipped, energy {:.1}", state.stats.energy());
        return ActionOutcome::AlreadyDone;
    }
    state.add_stat(StatKind::Energy, energy::REPEAT_MEAL_RESTORE);
    state.add_stat(StatKind::Stress, -3.0);
    state.add_stat(StatKind::Reputation, 1.0);
    out.toast("Had a meal. Energy restored!");
    out.rebuild();
    ActionOutcome::Applied
}

// ── Library ─────────────────────────────────────────────────────────────

/// Read one book. Needs a library card and enough energy.
pub fn read_book(state: &mut GameState, out: &mut Outbox, title: &str) -> ActionOutcome {
    if !state.has_flag(Flag::LibraryCard) {
        return ActionOutcome::PreconditionNotMet;
    }
    if let Err(refused) = require_energy(
        state,
        out,
        energy::READING_MIN,
        "Too tired to read! Need at least 15 energy.",
    ) {
        return refused;
    }
    if !catalog::is_known_book(title) {
        log::debug!("Reading a book not on the shelves: {}", title);
    }

    let gain = if state.stats.knowledge() > 50.0 { 8 } else { 6 };
    state.add_xp(xp::READ_BOOK, out);
    let added = state.add_knowledge(gain);
    state.add_stat(StatKind::Stress, -2.0);
    state.add_stat(StatKind::Energy, -energy::READING_COST);
    state.add_stat(StatKind::Discipline, 2.0);
    state.books_read += 1;
    state.challenges.record(ChallengeId::ReadBooks, 1);
    out.toast(format!(
        "Read \"{}\" (+{} Knowledge, +{} XP)",
        title,
        added,
        xp::READ_BOOK
    ));
    out.rebuild();
    ActionOutcome::Applied
}

// ── City ────────────────────────────────────────────────────────────────

pub fn visit_city(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    if !state.flags.raise(Flag::VisitedCity) {
        return ActionOutcome::AlreadyDone;
    }
    log::info!("City visited on day {}", state.time.day());
    out.toast("Welcome to the city!");
    out.rebuild();
    ActionOutcome::Applied
}

// ── Buildings and pickups ───────────────────────────────────────────────

/// Whether the building is open right now. Toasts when it is closed.
pub fn enter_building(state: &GameState, out: &mut Outbox, key: &str) -> bool {
    if state.can_access_building(key) {
        return true;
    }
    let period = state.time.time_of_day();
    let name = Building::from_key(key).map(|b| b.name()).unwrap_or(key);
    out.toast(format!("{} is closed at {}", name, period.name()));
    false
}

pub fn collect_coin(state: &mut GameState, out: &mut Outbox, amount: u32) {
    if amount == 0 {
        return;
    }
    state.wallet.earn(amount);
    state.challenges.record(ChallengeId::CollectCoins, amount);
    out.rebuild();
}
