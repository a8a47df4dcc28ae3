use evotable::{
    domain::{BREAK_SLOT, SUBJECT_HOURS_PER_CLASS},
    generate_timetable_seeded, EvolutionOptions, TimetableProblem,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn single_subject_single_faculty_single_class() {
    init_tracing();
    let problem = TimetableProblem::new(&["Math"], &["Alice: Math"], &["10A"]);
    let report = generate_timetable_seeded(&problem, 7).unwrap();

    // The initializer's own occupancy guard held, and reordering cannot
    // break it, so the canonical conflict pass finds nothing.
    assert!(report.conflicts.is_empty());

    // 7 hours were attempted against 6 slots per independently drawn day;
    // whatever survived is exactly Alice's workload.
    let placed: u32 = report
        .class_grid("10A")
        .unwrap()
        .rows()
        .map(|(_, row)| row.iter().filter(|cell| !cell.is_empty()).count() as u32)
        .sum();
    assert!(placed <= SUBJECT_HOURS_PER_CLASS);
    assert!(placed > 0);
    assert_eq!(report.workload_summary(), vec![("Alice", placed)]);
}

#[test]
fn descriptor_without_separator_leaves_no_trace() {
    init_tracing();
    let problem = TimetableProblem::new(&["Math"], &["Bob Math", "Alice: Math"], &["10A"]);
    let report = generate_timetable_seeded(&problem, 11).unwrap();

    assert!(report.faculty_grid("Bob").is_none());
    assert!(report
        .workload_summary()
        .iter()
        .all(|(name, _)| *name != "Bob" && *name != "Bob Math"));
    assert!(report.faculty_grid("Alice").is_some());
}

#[test]
fn course_without_eligible_faculty_yields_blank_teacher_cells() {
    init_tracing();
    let problem = TimetableProblem::new(&["History"], &["Alice: Math"], &["10A"]);
    let report = generate_timetable_seeded(&problem, 13).unwrap();

    let grid = report.class_grid("10A").unwrap();
    let mut placed = 0;
    for (_, row) in grid.rows() {
        for cell in row {
            if !cell.is_empty() {
                assert_eq!(cell, "History ()");
                placed += 1;
            }
        }
    }
    assert!(placed > 0);
    // The workload summary holds only real faculty names.
    assert_eq!(report.workload_summary(), vec![("Alice", 0)]);
}

#[test]
fn break_slot_is_never_scheduled() {
    init_tracing();
    let problem = TimetableProblem::new(
        &["Math", "Physics", "Chemistry"],
        &["Alice: Math", "Bob: Physics, Chemistry"],
        &["10A", "10B", "10C"],
    );
    let report = generate_timetable_seeded(&problem, 17).unwrap();

    for class in &report.classes {
        for (_, row) in class.grid.rows() {
            assert!(row[BREAK_SLOT].is_empty());
        }
    }
    for member in &report.faculty {
        for (_, row) in member.grid.rows() {
            assert!(row[BREAK_SLOT].is_empty());
        }
    }
}

#[test]
fn default_options_match_the_published_parameters() {
    let options = EvolutionOptions::default();
    assert_eq!(options.population_size(), 50);
    assert_eq!(options.generations(), 1000);
    assert!((options.mutation_rate() - 0.01).abs() < f64::EPSILON);
}
