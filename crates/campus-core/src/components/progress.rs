//! Progress components: quest log, flags, and academic course cursors.

use serde::{Deserialize, Serialize};

use campus_logic::catalog::{DepartmentId, SchoolId};
use campus_logic::progression::{Flag, Quest};

/// Completion state for every [`Quest`]. Entries only go from `false` to
/// `true`, except for the school-change reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestLog {
    done: [bool; Quest::COUNT],
}

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self, quest: Quest) -> bool {
        self.done[quest.index()]
    }

    /// Mark a quest done. Returns `true` only on the first completion.
    pub fn complete(&mut self, quest: Quest) -> bool {
        let slot = &mut self.done[quest.index()];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    /// Clear a quest. Only the school hard reset is allowed to do this.
    pub(crate) fn revoke(&mut self, quest: Quest) {
        self.done[quest.index()] = false;
    }

    pub fn all_done(&self) -> bool {
        self.done.iter().all(|d| *d)
    }

    pub fn any_done(&self) -> bool {
        self.done.iter().any(|d| *d)
    }

    pub fn completed_count(&self) -> usize {
        self.done.iter().filter(|d| **d).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Quest, bool)> + '_ {
        Quest::ALL.iter().map(move |q| (*q, self.is_done(*q)))
    }
}

/// One-shot [`Flag`] markers. Never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSet {
    set: [bool; Flag::COUNT],
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, flag: Flag) -> bool {
        self.set[flag.index()]
    }

    /// Raise a flag. Returns `true` only the first time.
    pub fn raise(&mut self, flag: Flag) -> bool {
        let slot = &mut self.set[flag.index()];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }
}

/// Sequential cursor over a fixed ordered course list.
///
/// Courses `0..completed` are done; the next course is always `completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCursor {
    completed: usize,
}

impl CourseCursor {
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Index of the next course, or `None` once all `len` are done.
    pub fn next_index(&self, len: usize) -> Option<usize> {
        (self.completed < len).then_some(self.completed)
    }

    pub fn is_done(&self, index: usize) -> bool {
        index < self.completed
    }

    /// Complete the next course. Returns the completed index.
    pub fn advance(&mut self, len: usize) -> Option<usize> {
        let index = self.next_index(len)?;
        self.completed += 1;
        Some(index)
    }

    pub fn is_finished(&self, len: usize) -> bool {
        self.completed >= len
    }

    pub fn reset(&mut self) {
        self.completed = 0;
    }
}

/// The department a student has declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRecord {
    pub id: DepartmentId,
    pub name: String,
    pub school: SchoolId,
}

impl DepartmentRecord {
    pub fn new(id: DepartmentId) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            school: id.school(),
        }
    }
}

/// Identifies one course completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseKey {
    Program {
        school: SchoolId,
        index: usize,
    },
    Department {
        school: SchoolId,
        department: DepartmentId,
        index: usize,
    },
}

/// School, department, and course progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicProgress {
    pub school: Option<SchoolId>,
    pub department: Option<DepartmentRecord>,
    pub program_courses: CourseCursor,
    pub department_courses: CourseCursor,
}

impl AcademicProgress {
    /// Drop everything that depends on the chosen school.
    pub(crate) fn reset_downstream(&mut self) {
        self.department = None;
        self.program_courses.reset();
        self.department_courses.reset();
    }

    pub fn department_id(&self) -> Option<DepartmentId> {
        self.department.as_ref().map(|d| d.id)
    }

    /// Core course list of the chosen school (empty if none).
    pub fn core_courses(&self) -> &'static [&'static str] {
        self.school.map(|s| s.core_courses()).unwrap_or(&[])
    }

    /// Course list of the chosen department (empty if none).
    pub fn department_course_list(&self) -> &'static [&'static str] {
        self.department_id().map(|d| d.courses()).unwrap_or(&[])
    }

    /// `(done, total)` for the program core.
    pub fn core_progress(&self) -> (usize, usize) {
        (self.program_courses.completed(), self.core_courses().len())
    }

    /// `(done, total)` for the department courses.
    pub fn department_progress(&self) -> (usize, usize) {
        (
            self.department_courses.completed(),
            self.department_course_list().len(),
        )
    }

    pub fn is_course_done(&self, key: CourseKey) -> bool {
        match key {
            CourseKey::Program { school, index } => {
                self.school == Some(school) && self.program_courses.is_done(index)
            }
            CourseKey::Department {
                school,
                department,
                index,
            } => {
                self.school == Some(school)
                    && self.department_id() == Some(department)
                    && self.department_courses.is_done(index)
            }
        }
    }

    /// Every completed course, program core first.
    pub fn completed_courses(&self) -> Vec<CourseKey> {
        let mut keys = Vec::new();
        if let Some(school) = self.school {
            keys.extend(
                (0..self.program_courses.completed())
                    .map(|index| CourseKey::Program { school, index }),
            );
            if let Some(department) = self.department_id() {
                keys.extend((0..self.department_courses.completed()).map(|index| {
                    CourseKey::Department {
                        school,
                        department,
                        index,
                    }
                }));
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quest_complete_once() {
        let mut log = QuestLog::new();
        assert!(log.complete(Quest::Timetable));
        assert!(!log.complete(Quest::Timetable));
        assert!(log.is_done(Quest::Timetable));
        assert_eq!(log.completed_count(), 1);
        assert!(log.any_done());
        assert!(!log.all_done());
    }

    #[test]
    fn test_flags_monotonic() {
        let mut flags = FlagSet::new();
        assert!(!flags.is_set(Flag::DormKey));
        assert!(flags.raise(Flag::DormKey));
        assert!(!flags.raise(Flag::DormKey));
        assert!(flags.is_set(Flag::DormKey));
    }

    #[test]
    fn test_cursor_sequential() {
        let mut cursor = CourseCursor::default();
        assert_eq!(cursor.advance(3), Some(0));
        assert_eq!(cursor.advance(3), Some(1));
        assert!(cursor.is_done(1));
        assert!(!cursor.is_done(2));
        assert_eq!(cursor.advance(3), Some(2));
        assert!(cursor.is_finished(3));
        assert_eq!(cursor.advance(3), None);
        assert_eq!(cursor.completed(), 3);
    }

    #[test]
    fn test_completed_course_keys() {
        let mut progress = AcademicProgress {
            school: Some(SchoolId::Ece),
            ..Default::default()
        };
        progress.program_courses.advance(3);
        progress.program_courses.advance(3);
        progress.department = Some(DepartmentRecord::new(DepartmentId::Computer));
        progress.department_courses.advance(3);

        let keys = progress.completed_courses();
        assert_eq!(keys.len(), 3);
        assert!(progress.is_course_done(CourseKey::Program {
            school: SchoolId::Ece,
            index: 1
        }));
        assert!(!progress.is_course_done(CourseKey::Program {
            school: SchoolId::Civil,
            index: 0
        }));
        assert!(progress.is_course_done(CourseKey::Department {
            school: SchoolId::Ece,
            department: DepartmentId::Computer,
            index: 0
        }));
    }

    #[test]
    fn test_reset_downstream() {
        let mut progress = AcademicProgress {
            school: Some(SchoolId::Mech),
            ..Default::default()
        };
        progress.program_courses.advance(3);
        progress.department = Some(DepartmentRecord::new(DepartmentId::Materials));
        progress.reset_downstream();
        assert_eq!(progress.school, Some(SchoolId::Mech));
        assert_eq!(progress.department, None);
        assert_eq!(progress.core_progress(), (0, 3));
    }
}
