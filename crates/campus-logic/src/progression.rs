//! Quest and flag identifiers, academic stages, and XP ranks.

use serde::{Deserialize, Serialize};

/// Quests shown in the HUD checklist. All done = victory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quest {
    FirstClass,
    StudentId,
    LibraryVisit,
    Timetable,
    EatMeal,
    ChooseSchool,
    ProgramOrientation,
    CompleteProgramCourses,
    ChooseDepartment,
    CompleteDepartmentCourses,
}

impl Quest {
    pub const COUNT: usize = 10;

    pub const ALL: [Quest; Quest::COUNT] = [
        Quest::FirstClass,
        Quest::StudentId,
        Quest::LibraryVisit,
        Quest::Timetable,
        Quest::EatMeal,
        Quest::ChooseSchool,
        Quest::ProgramOrientation,
        Quest::CompleteProgramCourses,
        Quest::ChooseDepartment,
        Quest::CompleteDepartmentCourses,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn key(&self) -> &'static str {
        match self {
            Quest::FirstClass => "firstClass",
            Quest::StudentId => "studentId",
            Quest::LibraryVisit => "libraryVisit",
            Quest::Timetable => "timetable",
            Quest::EatMeal => "eatMeal",
            Quest::ChooseSchool => "chooseSchool",
            Quest::ProgramOrientation => "programOrientation",
            Quest::CompleteProgramCourses => "completeProgramCourses",
            Quest::ChooseDepartment => "chooseDepartment",
            Quest::CompleteDepartmentCourses => "completeDepartmentCourses",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Quest::ALL.iter().copied().find(|q| q.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quest::FirstClass => "Attend your first class",
            Quest::StudentId => "Get your student ID",
            Quest::LibraryVisit => "Register at the library",
            Quest::Timetable => "Collect your timetable",
            Quest::EatMeal => "Eat a meal",
            Quest::ChooseSchool => "Choose a school",
            Quest::ProgramOrientation => "Attend program orientation",
            Quest::CompleteProgramCourses => "Complete the program core",
            Quest::ChooseDepartment => "Choose a department",
            Quest::CompleteDepartmentCourses => "Complete department courses",
        }
    }

    /// Quests wiped when a school is (re-)chosen.
    pub fn is_downstream_of_school(&self) -> bool {
        matches!(
            self,
            Quest::ProgramOrientation
                | Quest::CompleteProgramCourses
                | Quest::ChooseDepartment
                | Quest::CompleteDepartmentCourses
        )
    }
}

/// One-shot accomplishment markers that are not quests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Flag {
    DormKey,
    FirstClassBadge,
    LibraryCard,
    MealCoupon,
    StudentId,
    Timetable,
    AteMeal,
    DormStudyDone,
    VisitedCity,
    VictoryAwarded,
}

impl Flag {
    pub const COUNT: usize = 10;

    pub const ALL: [Flag; Flag::COUNT] = [
        Flag::DormKey,
        Flag::FirstClassBadge,
        Flag::LibraryCard,
        Flag::MealCoupon,
        Flag::StudentId,
        Flag::Timetable,
        Flag::AteMeal,
        Flag::DormStudyDone,
        Flag::VisitedCity,
        Flag::VictoryAwarded,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Position in the academic state machine, derived from quest state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AcademicStage {
    NoSchool,
    SchoolChosen,
    Oriented,
    ProgramCoreDone,
    DepartmentChosen,
    DepartmentCoreDone,
}

/// Title shown next to the XP counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Rookie,
    Explorer,
    Achiever,
    Master,
}

impl Rank {
    /// <30 Rookie, 30–59 Explorer, 60–99 Achiever, ≥100 Master.
    pub fn for_xp(xp: u32) -> Self {
        if xp >= 100 {
            Rank::Master
        } else if xp >= 60 {
            Rank::Achiever
        } else if xp >= 30 {
            Rank::Explorer
        } else {
            Rank::Rookie
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rank::Rookie => "Rookie",
            Rank::Explorer => "Explorer",
            Rank::Achiever => "Achiever",
            Rank::Master => "Master",
        }
    }
}
