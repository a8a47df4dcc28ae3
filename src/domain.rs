//! # Domain Model
//!
//! Immutable description of the timetabling problem: courses, faculty,
//! class sections, and the fixed day/slot grid. Entities are created once
//! from raw input and never mutated afterwards; everything the search
//! needs beyond them is derived up front (the subject → faculty mapping).

use std::collections::HashMap;

/// Teaching days, in display order.
pub const DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Time slot labels, in display order. One of them is the lunch break and
/// is never assignable.
pub const TIME_SLOTS: [&str; 7] = ["1", "2", "3", "4", "break", "5", "6"];

/// Index of the break slot within [`TIME_SLOTS`].
pub const BREAK_SLOT: usize = 4;

/// Weekly hours every course must receive in every class section.
pub const SUBJECT_HOURS_PER_CLASS: u32 = 7;

/// Inclusive lower bound of the acceptable weekly workload per faculty.
pub const FACULTY_MIN_HOURS: u32 = 20;

/// Inclusive upper bound of the acceptable weekly workload per faculty.
pub const FACULTY_MAX_HOURS: u32 = 22;

/// Recorded per faculty; not enforced by the current search.
pub const MAX_DAILY_HOURS: u32 = 4;

/// Default number of candidate schedules per generation.
pub const POPULATION_SIZE: usize = 50;

/// Default number of generations to evolve.
pub const GENERATIONS: usize = 1000;

/// Default per-candidate mutation probability.
pub const MUTATION_RATE: f64 = 0.01;

/// A taught subject. Every class section must receive
/// `hours_per_class` hours of it per week.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: usize,
    pub name: String,
    pub hours_per_class: u32,
}

/// A teacher and the subjects they can cover.
///
/// `max_daily_hours` is carried from input but not consulted by the
/// search; see DESIGN.md.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    pub id: usize,
    pub name: String,
    pub subjects: Vec<String>,
    pub max_daily_hours: u32,
}

impl Faculty {
    /// Parses a faculty descriptor of the form `"Name: Subject1, Subject2"`.
    ///
    /// A descriptor without the `:` separator is rejected entirely — no
    /// partial record is created. Subjects are split on commas, trimmed,
    /// and empty tokens discarded. No further validation: an empty subject
    /// list is accepted.
    pub fn parse(id: usize, descriptor: &str) -> Option<Self> {
        let (name, subjects) = descriptor.split_once(':')?;
        let subjects = subjects
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        Some(Self {
            id,
            name: name.trim().to_owned(),
            subjects,
            max_daily_hours: MAX_DAILY_HOURS,
        })
    }
}

/// A group of students that receives its own weekly grid.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSection {
    pub id: usize,
    pub name: String,
}

/// The full immutable problem instance handed to the search.
///
/// `faculty_by_subject` maps a subject name to the ids of the faculty who
/// teach it, in faculty input order. It is built once at construction and
/// used to pick an eligible teacher for each placement.
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    pub courses: Vec<Course>,
    pub faculty: Vec<Faculty>,
    pub classes: Vec<ClassSection>,
    faculty_by_subject: HashMap<String, Vec<usize>>,
}

impl TimetableProblem {
    /// Builds a problem instance from raw input.
    ///
    /// Malformed faculty descriptors (no `:` separator) are skipped
    /// silently; this is a parsing policy, not an error. Duplicate names
    /// and empty subject lists are accepted as-is.
    pub fn new<S: AsRef<str>>(
        course_names: &[S],
        faculty_descriptors: &[S],
        class_names: &[S],
    ) -> Self {
        let courses = course_names
            .iter()
            .enumerate()
            .map(|(id, name)| Course {
                id,
                name: name.as_ref().to_owned(),
                hours_per_class: SUBJECT_HOURS_PER_CLASS,
            })
            .collect();

        // Ids are positions in the accepted list, so a skipped descriptor
        // cannot desynchronize id-based lookups.
        let mut faculty: Vec<Faculty> = Vec::with_capacity(faculty_descriptors.len());
        for descriptor in faculty_descriptors {
            if let Some(member) = Faculty::parse(faculty.len(), descriptor.as_ref()) {
                faculty.push(member);
            }
        }

        let classes = class_names
            .iter()
            .enumerate()
            .map(|(id, name)| ClassSection {
                id,
                name: name.as_ref().to_owned(),
            })
            .collect();

        let mut faculty_by_subject: HashMap<String, Vec<usize>> = HashMap::new();
        for member in &faculty {
            for subject in &member.subjects {
                faculty_by_subject
                    .entry(subject.clone())
                    .or_default()
                    .push(member.id);
            }
        }

        Self {
            courses,
            faculty,
            classes,
            faculty_by_subject,
        }
    }

    /// Ids of the faculty eligible to teach `subject`, in input order.
    /// Empty when no faculty lists the subject.
    pub fn eligible_faculty(&self, subject: &str) -> &[usize] {
        self.faculty_by_subject
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Indices of the assignable (non-break) slots within [`TIME_SLOTS`].
pub fn assignable_slots() -> impl Iterator<Item = usize> {
    (0..TIME_SLOTS.len()).filter(|&s| s != BREAK_SLOT)
}
