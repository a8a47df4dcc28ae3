//! # Schedule Materializer / Conflict Reporter
//!
//! Turns the best candidate into the grids the presentation layer renders:
//! a Day × TimeSlot table per class, a symmetric table per faculty, the
//! per-faculty workload summary, and the list of residual conflicts.
//!
//! Assignments are replayed in the schedule's stored order and the first
//! writer to a (class, day, slot) cell wins; every later writer is dropped
//! and reported. This pass is the authoritative conflict check: the
//! initializer's occupancy guard only holds at construction time, and any
//! future construction path could reintroduce collisions.

use crate::domain::{TimetableProblem, DAYS, TIME_SLOTS};
use crate::schedule::Schedule;

/// A Day × TimeSlot table of display strings. Rows follow [`DAYS`] order,
/// columns follow [`TIME_SLOTS`] order; the break column is present and
/// always empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<String>>,
}

impl Grid {
    fn new() -> Self {
        Self {
            cells: vec![vec![String::new(); TIME_SLOTS.len()]; DAYS.len()],
        }
    }

    pub fn cell(&self, day: usize, slot: usize) -> &str {
        &self.cells[day][slot]
    }

    fn set(&mut self, day: usize, slot: usize, value: String) {
        self.cells[day][slot] = value;
    }

    /// Rows in day order, each a slice of cell strings in slot order.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        DAYS.iter()
            .copied()
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}

/// The weekly grid for one class section.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTimetable {
    pub name: String,
    pub grid: Grid,
}

/// The weekly grid for one faculty member plus their assigned hours.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyTimetable {
    pub name: String,
    pub grid: Grid,
    pub total_hours: u32,
}

/// Everything the presentation layer needs to render one result.
///
/// Class entries keep input order; faculty entries are keyed by name in
/// first-occurrence order, so duplicate records share one grid and one
/// workload row. A faculty with no surviving assignments appears with
/// zero hours, and no blank-named entry can ever occur because unassigned
/// hours carry no faculty at all.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimetableReport {
    pub classes: Vec<ClassTimetable>,
    pub faculty: Vec<FacultyTimetable>,
    pub conflicts: Vec<String>,
}

impl TimetableReport {
    /// Materializes `schedule` against `problem`.
    pub fn build(problem: &TimetableProblem, schedule: &Schedule) -> Self {
        let mut classes: Vec<ClassTimetable> = problem
            .classes
            .iter()
            .map(|class| ClassTimetable {
                name: class.name.clone(),
                grid: Grid::new(),
            })
            .collect();
        // One entry per distinct faculty name: duplicate records share a
        // grid and a workload row, keyed the way the summary is keyed.
        let mut faculty: Vec<FacultyTimetable> = Vec::new();
        let mut entry_by_id: Vec<usize> = Vec::with_capacity(problem.faculty.len());
        for member in &problem.faculty {
            match faculty.iter().position(|entry| entry.name == member.name) {
                Some(index) => entry_by_id.push(index),
                None => {
                    entry_by_id.push(faculty.len());
                    faculty.push(FacultyTimetable {
                        name: member.name.clone(),
                        grid: Grid::new(),
                        total_hours: 0,
                    });
                }
            }
        }
        let mut conflicts = Vec::new();

        for assignment in &schedule.assignments {
            let class = &mut classes[assignment.class_id];
            if !class.grid.cell(assignment.day, assignment.slot).is_empty() {
                conflicts.push(format!(
                    "Conflict in {} on {} at {}",
                    class.name, DAYS[assignment.day], TIME_SLOTS[assignment.slot]
                ));
                continue;
            }

            let subject = &problem.courses[assignment.course_id].name;
            let teacher = assignment
                .faculty_id
                .map(|id| problem.faculty[id].name.as_str())
                .unwrap_or("");
            class.grid.set(
                assignment.day,
                assignment.slot,
                format!("{} ({})", subject, teacher),
            );

            if let Some(id) = assignment.faculty_id {
                let member = &mut faculty[entry_by_id[id]];
                member.grid.set(
                    assignment.day,
                    assignment.slot,
                    format!("{} ({})", subject, class.name),
                );
                member.total_hours += 1;
            }
        }

        Self {
            classes,
            faculty,
            conflicts,
        }
    }

    /// Faculty name → total surviving hours, one row per distinct name
    /// in first-occurrence order.
    pub fn workload_summary(&self) -> Vec<(&str, u32)> {
        self.faculty
            .iter()
            .map(|member| (member.name.as_str(), member.total_hours))
            .collect()
    }

    pub fn class_grid(&self, name: &str) -> Option<&Grid> {
        self.classes
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.grid)
    }

    pub fn faculty_grid(&self, name: &str) -> Option<&Grid> {
        self.faculty
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.grid)
    }
}
