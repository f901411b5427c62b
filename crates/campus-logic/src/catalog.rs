//! Fixed academic catalog - schools, departments, and their ordered courses.
//!
//! | School | Departments |
//! |--------|-------------|
//! | `civil` - Civil & Water Resources | `civil`, `water` |
//! | `ece` - Electrical & Computer | `electrical`, `computer` |
//! | `mech` - Mechanical & Materials | `mechanical`, `materials` |
//!
//! Every school has three core courses and every department three courses.
//! Course order is fixed; players complete them strictly in sequence.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SchoolId {
    Civil,
    Ece,
    Mech,
}

impl SchoolId {
    pub const ALL: [SchoolId; 3] = [SchoolId::Civil, SchoolId::Ece, SchoolId::Mech];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "civil" => Some(SchoolId::Civil),
            "ece" => Some(SchoolId::Ece),
            "mech" => Some(SchoolId::Mech),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SchoolId::Civil => "civil",
            SchoolId::Ece => "ece",
            SchoolId::Mech => "mech",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SchoolId::Civil => "School of Civil & Water Resources",
            SchoolId::Ece => "School of Electrical & Computer",
            SchoolId::Mech => "School of Mechanical & Materials",
        }
    }

    /// Program core, in the order it must be taken.
    pub fn core_courses(&self) -> &'static [&'static str] {
        match self {
            SchoolId::Civil => &["Calculus I", "Physics I", "Intro to Engineering"],
            SchoolId::Ece => &["Calculus I", "Programming Basics", "Digital Systems I"],
            SchoolId::Mech => &["Calculus I", "Engineering Graphics", "Materials Basics"],
        }
    }

    pub fn departments(&self) -> [DepartmentId; 2] {
        match self {
            SchoolId::Civil => [DepartmentId::Civil, DepartmentId::Water],
            SchoolId::Ece => [DepartmentId::Electrical, DepartmentId::Computer],
            SchoolId::Mech => [DepartmentId::Mechanical, DepartmentId::Materials],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DepartmentId {
    Civil,
    Water,
    Electrical,
    Computer,
    Mechanical,
    Materials,
}

impl DepartmentId {
    pub const ALL: [DepartmentId; 6] = [
        DepartmentId::Civil,
        DepartmentId::Water,
        DepartmentId::Electrical,
        DepartmentId::Computer,
        DepartmentId::Mechanical,
        DepartmentId::Materials,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "civil" => Some(DepartmentId::Civil),
            "water" => Some(DepartmentId::Water),
            "electrical" => Some(DepartmentId::Electrical),
            "computer" => Some(DepartmentId::Computer),
            "mechanical" => Some(DepartmentId::Mechanical),
            "materials" => Some(DepartmentId::Materials),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DepartmentId::Civil => "civil",
            DepartmentId::Water => "water",
            DepartmentId::Electrical => "electrical",
            DepartmentId::Computer => "computer",
            DepartmentId::Mechanical => "mechanical",
            DepartmentId::Materials => "materials",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DepartmentId::Civil => "Civil Engineering",
            DepartmentId::Water => "Water Resources Engineering",
            DepartmentId::Electrical => "Electrical Engineering",
            DepartmentId::Computer => "Computer Engineering",
            DepartmentId::Mechanical => "Mechanical Engineering",
            DepartmentId::Materials => "Materials Science",
        }
    }

    /// The school that offers this department.
    pub fn school(&self) -> SchoolId {
        match self {
            DepartmentId::Civil | DepartmentId::Water => SchoolId::Civil,
            DepartmentId::Electrical | DepartmentId::Computer => SchoolId::Ece,
            DepartmentId::Mechanical | DepartmentId::Materials => SchoolId::Mech,
        }
    }

    pub fn courses(&self) -> &'static [&'static str] {
        match self {
            DepartmentId::Civil => &["Intro to Structures", "Soil Mechanics", "Surveying"],
            DepartmentId::Water => &["Fluid Mechanics", "Hydrology", "Irrigation Engineering"],
            DepartmentId::Electrical => &["Circuit Analysis", "Electromagnetics", "Power Systems"],
            DepartmentId::Computer => {
                &["Programming I", "Data Structures", "Computer Architecture"]
            }
            DepartmentId::Mechanical => &["Statics", "Dynamics", "Thermodynamics"],
            DepartmentId::Materials => &[
                "Materials Science",
                "Manufacturing Processes",
                "Strength of Materials",
            ],
        }
    }
}

/// Library shelves: category and titles available to read.
pub const BOOK_SHELVES: [(&str, [&str; 3]); 3] = [
    ("Engineering", ["Statics Basics", "Digital Logic", "Fluid Flow 101"]),
    ("Science", ["Physics Primer", "Organic Chemistry", "Biology of Cells"]),
    ("Literature", ["Poetry Classics", "Modern Novels", "World Myths"]),
];

/// Whether `title` is on any library shelf.
pub fn is_known_book(title: &str) -> bool {
    BOOK_SHELVES
        .iter()
        .any(|(_, titles)| titles.contains(&title))
}
