//! Quest system - the academic progression state machine and the
//! registration side quests.
//!
//! Academic progress is strictly sequential for the chosen school:
//!
//! ```text
//! NoSchool → SchoolChosen → Oriented → ProgramCoreDone
//!          → DepartmentChosen → DepartmentCoreDone
//! ```
//!
//! Every action is idempotent. Once its guarding quest or flag is set,
//! calling it again changes nothing and grants nothing.

use serde::{Deserialize, Serialize};

use campus_logic::catalog::{DepartmentId, SchoolId};
use campus_logic::constants::{energy, xp};
use campus_logic::progression::{Flag, Quest};
use campus_logic::stats::StatKind;

use crate::components::DepartmentRecord;
use crate::notify::Outbox;
use crate::state::GameState;
use crate::systems::challenges::ChallengeId;

/// Result of a player action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The action changed state.
    Applied,
    /// Its guard was already satisfied; nothing changed.
    AlreadyDone,
    /// A prerequisite is missing; nothing changed and nothing was shown.
    PreconditionNotMet,
    /// Not enough energy; a notification was shown.
    TooTired { required: f64, available: f64 },
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

/// Refuse an action with a toast when energy is below `required`.
pub(crate) fn require_energy(
    state: &GameState,
    out: &mut Outbox,
    required: f64,
    message: &str,
) -> Result<(), ActionOutcome> {
    let available = state.stats.energy();
    if available < required {
        log::debug!("Action refused: energy {:.1} < {:.1}", available, required);
        out.toast(message);
        return Err(ActionOutcome::TooTired {
            required,
            available,
        });
    }
    Ok(())
}

// ── Academic track ──────────────────────────────────────────────────────

/// Pick a school. Only valid while no school is chosen.
pub fn choose_school(state: &mut GameState, out: &mut Outbox, school: SchoolId) -> ActionOutcome {
    if state.academics.school.is_some() {
        return ActionOutcome::AlreadyDone;
    }

    // Hard reset of everything downstream of the school.
    for quest in Quest::ALL {
        if quest.is_downstream_of_school() {
            state.quests.revoke(quest);
        }
    }
    state.academics.reset_downstream();

    state.academics.school = Some(school);
    log::info!("School chosen: {}", school.key());
    state.complete_quest(Quest::ChooseSchool, out);
    state.add_item(&format!("School: {}", school.name()), out);
    out.rebuild();
    ActionOutcome::Applied
}

pub fn attend_orientation(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    if state.academics.school.is_none() {
        return ActionOutcome::PreconditionNotMet;
    }
    if state.is_quest_done(Quest::ProgramOrientation) {
        return ActionOutcome::AlreadyDone;
    }
    state.complete_quest(Quest::ProgramOrientation, out);
    state.add_xp(xp::ORIENTATION, out);
    out.toast(format!("Orientation complete (+{} XP)", xp::ORIENTATION));
    out.rebuild();
    ActionOutcome::Applied
}

/// Complete the lowest-index unfinished core course of the chosen school.
pub fn complete_next_core_course(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    let Some(school) = state.academics.school else {
        return ActionOutcome::PreconditionNotMet;
    };
    if !state.is_quest_done(Quest::ProgramOrientation) {
        return ActionOutcome::PreconditionNotMet;
    }
    let courses = school.core_courses();
    let Some(index) = state.academics.program_courses.advance(courses.len()) else {
        return ActionOutcome::AlreadyDone;
    };

    log::info!("Core course {} of {} done: {}", index + 1, courses.len(), courses[index]);
    state.add_xp(xp::COURSE, out);
    out.toast(format!("Completed {} (+{} XP)", courses[index], xp::COURSE));
    state.challenges.record(ChallengeId::AttendClass, 1);
    if state.academics.program_courses.is_finished(courses.len()) {
        state.complete_quest(Quest::CompleteProgramCourses, out);
    }
    out.rebuild();
    ActionOutcome::Applied
}

/// Declare a department of the chosen school once the core is done.
pub fn choose_department(
    state: &mut GameState,
    out: &mut Outbox,
    department: DepartmentId,
) -> ActionOutcome {
    if state.academics.department.is_some() {
        return ActionOutcome::AlreadyDone;
    }
    if !state.is_quest_done(Quest::CompleteProgramCourses)
        || state.academics.school != Some(department.school())
    {
        return ActionOutcome::PreconditionNotMet;
    }

    let record = DepartmentRecord::new(department);
    let item = format!("Department: {}", record.name);
    state.academics.department = Some(record);
    state.academics.department_courses.reset();
    log::info!("Department chosen: {}", department.key());
    state.complete_quest(Quest::ChooseDepartment, out);
    state.add_item(&item, out);
    out.rebuild();
    ActionOutcome::Applied
}

/// Complete the lowest-index unfinished course of the chosen department.
pub fn complete_next_department_course(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    let Some(department) = state.academics.department_id() else {
        return ActionOutcome::PreconditionNotMet;
    };
    let courses = department.courses();
    let Some(index) = state.academics.department_courses.advance(courses.len()) else {
        return ActionOutcome::AlreadyDone;
    };

    log::info!(
        "Department course {} of {} done: {}",
        index + 1,
        courses.len(),
        courses[index]
    );
    state.add_xp(xp::COURSE, out);
    out.toast(format!("Completed {} (+{} XP)", courses[index], xp::COURSE));
    state.challenges.record(ChallengeId::AttendClass, 1);
    if state.academics.department_courses.is_finished(courses.len()) {
        state.complete_quest(Quest::CompleteDepartmentCourses, out);
    }
    out.rebuild();
    ActionOutcome::Applied
}

/// First class badge, available once orientation is done.
pub fn attend_first_class(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    if state.has_flag(Flag::FirstClassBadge) {
        return ActionOutcome::AlreadyDone;
    }
    if !state.is_quest_done(Quest::ProgramOrientation) {
        return ActionOutcome::PreconditionNotMet;
    }
    state.flags.raise(Flag::FirstClassBadge);
    state.add_item("First Class Badge", out);
    state.add_xp(xp::FIRST_CLASS, out);
    state.complete_quest(Quest::FirstClass, out);
    out.toast(format!("First Class completed (+{} XP)", xp::FIRST_CLASS));
    out.rebuild();
    ActionOutcome::Applied
}

// ── Registration side quests ────────────────────────────────────────────

pub fn collect_student_id(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    if state.has_flag(Flag::StudentId) {
        return ActionOutcome::AlreadyDone;
    }
    if let Err(refused) = require_energy(
        state,
        out,
        energy::ERRAND_MIN,
        "Too tired! Need at least 10 energy.",
    ) {
        return refused;
    }
    state.flags.raise(Flag::StudentId);
    state.add_item("Student ID Card", out);
    state.add_xp(xp::STUDENT_ID, out);
    state.add_stat(StatKind::Reputation, 3.0);
    state.add_stat(StatKind::Energy, -energy::ERRAND_COST);
    state.complete_quest(Quest::StudentId, out);
    out.toast(format!("Student ID collected (+{} XP, +3 Reputation)", xp::STUDENT_ID));
    out.rebuild();
    ActionOutcome::Applied
}

pub fn collect_timetable(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    if !state.flags.raise(Flag::Timetable) {
        return ActionOutcome::AlreadyDone;
    }
    state.add_item("Timetable", out);
    state.complete_quest(Quest::Timetable, out);
    out.toast("Timetable collected");
    out.rebuild();
    ActionOutcome::Applied
}

pub fn register_library_card(state: &mut GameState, out: &mut Outbox) -> ActionOutcome {
    if state.has_flag(Flag::LibraryCard) {
        return ActionOutcome::AlreadyDone;
    }
    if let Err(refused) = require_energy(
        state,
        out,
        energy::ERRAND_MIN,
        "Too tired! Need at least 10 energy.",
    ) {
        return refused;
    }
    state.flags.raise(Flag::LibraryCard);
    state.add_item("Library Card", out);
    state.add_xp(xp::LIBRARY_CARD, out);
    state.add_stat(StatKind::Reputation, 5.0);
    state.add_stat(StatKind::Energy, -energy::ERRAND_COST);
    state.complete_quest(Quest::LibraryVisit, out);
    out.toast(format!(
        "Library card registered (+{} XP, +5 Reputation)",
        xp::LIBRARY_CARD
    ));
    out.rebuild();
    ActionOutcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_logic::progression::AcademicStage;

    fn setup() -> (GameState, Outbox) {
        (GameState::default(), Outbox::new())
    }

    fn finish_core(state: &mut GameState, out: &mut Outbox, school: SchoolId) {
        choose_school(state, out, school);
        attend_orientation(state, out);
        for _ in 0..school.core_courses().len() {
            complete_next_core_course(state, out);
        }
    }

    #[test]
    fn test_choose_school_once() {
        let (mut state, mut out) = setup();
        assert!(choose_school(&mut state, &mut out, SchoolId::Ece).is_applied());
        attend_orientation(&mut state, &mut out);
        complete_next_core_course(&mut state, &mut out);
        let xp_before = state.xp;

        assert_eq!(
            choose_school(&mut state, &mut out, SchoolId::Ece),
            ActionOutcome::AlreadyDone
        );
        assert_eq!(
            choose_school(&mut state, &mut out, SchoolId::Civil),
            ActionOutcome::AlreadyDone
        );
        assert_eq!(state.academics.school, Some(SchoolId::Ece));
        assert!(state.is_quest_done(Quest::ProgramOrientation));
        assert_eq!(state.academics.core_progress(), (1, 3));
        assert_eq!(state.xp, xp_before);
        assert!(state
            .inventory
            .contains("School: School of Electrical & Computer"));
    }

    #[test]
    fn test_orientation_requires_school() {
        let (mut state, mut out) = setup();
        assert_eq!(
            attend_orientation(&mut state, &mut out),
            ActionOutcome::PreconditionNotMet
        );
        assert!(out.is_empty());
        choose_school(&mut state, &mut out, SchoolId::Mech);
        assert!(attend_orientation(&mut state, &mut out).is_applied());
        assert_eq!(state.xp, 10);
        assert_eq!(
            attend_orientation(&mut state, &mut out),
            ActionOutcome::AlreadyDone
        );
        assert_eq!(state.xp, 10);
    }

    #[test]
    fn test_core_courses_in_order() {
        let (mut state, mut out) = setup();
        choose_school(&mut state, &mut out, SchoolId::Civil);
        assert_eq!(
            complete_next_core_course(&mut state, &mut out),
            ActionOutcome::PreconditionNotMet
        );
        attend_orientation(&mut state, &mut out);

        for expected in 0..3 {
            assert!(complete_next_core_course(&mut state, &mut out).is_applied());
            assert_eq!(state.academics.program_courses.completed(), expected + 1);
            assert!(state.academics.program_courses.is_done(expected));
            assert!(!state.academics.program_courses.is_done(expected + 1));
        }
        assert!(state.is_quest_done(Quest::CompleteProgramCourses));
        assert_eq!(state.xp, 10 + 15);

        assert_eq!(
            complete_next_core_course(&mut state, &mut out),
            ActionOutcome::AlreadyDone
        );
        assert_eq!(state.xp, 25);
        assert_eq!(state.academic_stage(), AcademicStage::ProgramCoreDone);
    }

    #[test]
    fn test_department_must_match_school() {
        let (mut state, mut out) = setup();
        finish_core(&mut state, &mut out, SchoolId::Ece);
        assert_eq!(
            choose_department(&mut state, &mut out, DepartmentId::Water),
            ActionOutcome::PreconditionNotMet
        );
        assert!(choose_department(&mut state, &mut out, DepartmentId::Computer).is_applied());
        assert_eq!(
            choose_department(&mut state, &mut out, DepartmentId::Electrical),
            ActionOutcome::AlreadyDone
        );
        let record = state.academics.department.clone().unwrap();
        assert_eq!(record.id, DepartmentId::Computer);
        assert_eq!(record.school, SchoolId::Ece);
        assert!(state.inventory.contains("Department: Computer Engineering"));
    }

    #[test]
    fn test_department_requires_core() {
        let (mut state, mut out) = setup();
        choose_school(&mut state, &mut out, SchoolId::Ece);
        attend_orientation(&mut state, &mut out);
        complete_next_core_course(&mut state, &mut out);
        assert_eq!(
            choose_department(&mut state, &mut out, DepartmentId::Computer),
            ActionOutcome::PreconditionNotMet
        );
        assert_eq!(
            complete_next_department_course(&mut state, &mut out),
            ActionOutcome::PreconditionNotMet
        );
    }

    #[test]
    fn test_department_courses_complete_track() {
        let (mut state, mut out) = setup();
        finish_core(&mut state, &mut out, SchoolId::Mech);
        choose_department(&mut state, &mut out, DepartmentId::Mechanical);
        for _ in 0..3 {
            assert!(complete_next_department_course(&mut state, &mut out).is_applied());
        }
        assert!(state.is_quest_done(Quest::CompleteDepartmentCourses));
        assert_eq!(state.academic_stage(), AcademicStage::DepartmentCoreDone);
        let xp = state.xp;
        assert_eq!(
            complete_next_department_course(&mut state, &mut out),
            ActionOutcome::AlreadyDone
        );
        assert_eq!(state.xp, xp);
        assert_eq!(state.academics.completed_courses().len(), 6);
    }

    #[test]
    fn test_first_class_after_orientation() {
        let (mut state, mut out) = setup();
        assert_eq!(
            attend_first_class(&mut state, &mut out),
            ActionOutcome::PreconditionNotMet
        );
        choose_school(&mut state, &mut out, SchoolId::Civil);
        attend_orientation(&mut state, &mut out);
        assert!(attend_first_class(&mut state, &mut out).is_applied());
        assert!(state.inventory.contains("First Class Badge"));
        assert!(state.is_quest_done(Quest::FirstClass));
        assert_eq!(state.xp, 20);
        assert_eq!(
            attend_first_class(&mut state, &mut out),
            ActionOutcome::AlreadyDone
        );
        assert_eq!(state.xp, 20);
    }

    #[test]
    fn test_student_id_energy_gate() {
        let (mut state, mut out) = setup();
        state.set_stat(StatKind::Energy, 5.0);
        let rep = state.stats.reputation();

        let outcome = collect_student_id(&mut state, &mut out);
        assert_eq!(
            outcome,
            ActionOutcome::TooTired {
                required: 10.0,
                available: 5.0
            }
        );
        assert!(!state.has_flag(Flag::StudentId));
        assert_eq!(state.xp, 0);
        assert_eq!(
            out.toasts().collect::<Vec<_>>(),
            vec!["Too tired! Need at least 10 energy."]
        );

        state.set_stat(StatKind::Energy, 15.0);
        assert!(collect_student_id(&mut state, &mut out).is_applied());
        assert_eq!(state.xp, 15);
        assert_eq!(state.stats.reputation(), rep + 3.0);
        assert_eq!(state.stats.energy(), 5.0);
        assert!(state.has_flag(Flag::StudentId));
        assert!(state.is_quest_done(Quest::StudentId));

        assert_eq!(
            collect_student_id(&mut state, &mut out),
            ActionOutcome::AlreadyDone
        );
        assert_eq!(state.xp, 15);
        assert_eq!(state.stats.energy(), 5.0);
    }

    #[test]
    fn test_timetable_once() {
        let (mut state, mut out) = setup();
        assert!(collect_timetable(&mut state, &mut out).is_applied());
        assert_eq!(
            collect_timetable(&mut state, &mut out),
            ActionOutcome::AlreadyDone
        );
        assert_eq!(state.inventory.len(), 1);
    }

    #[test]
    fn test_library_card() {
        let (mut state, mut out) = setup();
        assert!(register_library_card(&mut state, &mut out).is_applied());
        assert_eq!(state.xp, 20);
        assert_eq!(state.stats.energy(), 70.0);
        assert!(state.is_quest_done(Quest::LibraryVisit));
        assert_eq!(
            register_library_card(&mut state, &mut out),
            ActionOutcome::AlreadyDone
        );
    }

    #[test]
    fn test_courses_feed_daily_challenge() {
        let (mut state, mut out) = setup();
        choose_school(&mut state, &mut out, SchoolId::Ece);
        attend_orientation(&mut state, &mut out);
        complete_next_core_course(&mut state, &mut out);
        assert_eq!(state.challenges.get(ChallengeId::AttendClass).current, 1);
    }
}
