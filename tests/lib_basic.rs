#![forbid(unsafe_code)]
use hebdo::{
    load_roster, AssignmentKind, Day, Employee, RandomPicker, RosterSource, SchedError,
    ScheduleEvent, ScheduleOptions, Scheduler, SequencePicker, ShiftType,
};

fn names(list: &[String]) -> Vec<&str> {
    list.iter().map(String::as_str).collect()
}

fn run(employees: Vec<Employee>) -> Scheduler {
    let mut s = Scheduler::new();
    s.add_employees(employees).unwrap();
    s.run(&mut SequencePicker::first_available()).unwrap();
    s
}

#[test]
fn no_preferences_fills_in_roster_order() {
    let s = run(load_roster(RosterSource::WithoutPreferences));
    let week = s.schedule();

    for day in [Day::Sunday, Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday] {
        assert_eq!(names(week.assigned(day, ShiftType::Morning)), ["Mary", "Kate"]);
        assert_eq!(names(week.assigned(day, ShiftType::Afternoon)), ["Kevin", "Patrick"]);
        assert_eq!(names(week.assigned(day, ShiftType::Evening)), ["Evan", "Joe"]);
    }

    // tout le monde est au plafond après jeudi
    for day in [Day::Friday, Day::Saturday] {
        for shift in ShiftType::ALL {
            assert!(week.assigned(day, shift).is_empty());
            assert!(s.events().contains(&ScheduleEvent::Understaffed {
                day,
                shift,
                current: 0
            }));
        }
    }
    assert!(s.employees().iter().all(|e| e.days_worked() == 5));
}

#[test]
fn filler_sequence_drives_exact_first_day() {
    let mut s = Scheduler::new();
    s.add_employees(load_roster(RosterSource::WithoutPreferences))
        .unwrap();
    // candidats restants : 6, 5, 4, 3, 2, 1
    s.run(&mut SequencePicker::new(vec![5, 0, 3, 0, 1, 0])).unwrap();

    let sunday = s.schedule().day(Day::Sunday);
    assert_eq!(names(sunday.shift(ShiftType::Morning)), ["Joe", "Mary"]);
    assert_eq!(names(sunday.shift(ShiftType::Afternoon)), ["Evan", "Kate"]);
    assert_eq!(names(sunday.shift(ShiftType::Evening)), ["Patrick", "Kevin"]);
}

#[test]
fn preferences_roster_first_two_days() {
    let s = run(load_roster(RosterSource::WithPreferences));
    let week = s.schedule();

    assert_eq!(names(week.assigned(Day::Sunday, ShiftType::Morning)), ["Patrick", "Mary"]);
    assert_eq!(names(week.assigned(Day::Sunday, ShiftType::Afternoon)), ["Kevin", "Kate"]);
    assert_eq!(names(week.assigned(Day::Sunday, ShiftType::Evening)), ["Evan", "Joe"]);

    assert_eq!(names(week.assigned(Day::Monday, ShiftType::Morning)), ["Mary", "Patrick"]);
    assert_eq!(names(week.assigned(Day::Monday, ShiftType::Afternoon)), ["Kate", "Kevin"]);
    assert_eq!(names(week.assigned(Day::Monday, ShiftType::Evening)), ["Evan", "Joe"]);

    assert!(s.events().contains(&ScheduleEvent::Assigned {
        employee: "Patrick".into(),
        day: Day::Sunday,
        shift: ShiftType::Morning,
        kind: AssignmentKind::Preferred,
        days_worked: 1,
    }));
    assert!(s.events().contains(&ScheduleEvent::Assigned {
        employee: "Mary".into(),
        day: Day::Sunday,
        shift: ShiftType::Morning,
        kind: AssignmentKind::Filler,
        days_worked: 1,
    }));
}

#[test]
fn preferred_days_stop_at_weekly_cap() {
    let patrick = Day::ALL
        .into_iter()
        .fold(Employee::new("Patrick"), |e, d| e.prefer(d, ShiftType::Morning));
    let s = run(vec![patrick]);
    let week = s.schedule();

    assert_eq!(names(week.assigned(Day::Sunday, ShiftType::Morning)), ["Patrick"]);
    assert!(s.events().contains(&ScheduleEvent::Assigned {
        employee: "Patrick".into(),
        day: Day::Thursday,
        shift: ShiftType::Morning,
        kind: AssignmentKind::Preferred,
        days_worked: 5,
    }));

    for day in [Day::Friday, Day::Saturday] {
        assert!(s.events().contains(&ScheduleEvent::MaxDaysReached {
            employee: "Patrick".into(),
            day,
            days_worked: 5,
        }));
        assert_eq!(week.day(day).works("Patrick"), None);
    }
    assert_eq!(s.find_employee("Patrick").unwrap().days_worked(), 5);
}

#[test]
fn full_preferred_shift_falls_back_to_first_alternate() {
    let s = run(vec![
        Employee::new("Ann").prefer(Day::Monday, ShiftType::Morning),
        Employee::new("Bob").prefer(Day::Monday, ShiftType::Morning),
        Employee::new("Cid").prefer(Day::Monday, ShiftType::Morning),
    ]);
    let monday = s.schedule().day(Day::Monday);

    assert_eq!(names(monday.shift(ShiftType::Morning)), ["Ann", "Bob"]);
    assert_eq!(names(monday.shift(ShiftType::Afternoon)), ["Cid"]);

    let full = s
        .events()
        .iter()
        .position(|e| {
            *e == ScheduleEvent::PreferredFull {
                employee: "Cid".into(),
                day: Day::Monday,
                shift: ShiftType::Morning,
            }
        })
        .expect("preferred full event");
    assert_eq!(
        s.events()[full + 1],
        ScheduleEvent::Assigned {
            employee: "Cid".into(),
            day: Day::Monday,
            shift: ShiftType::Afternoon,
            kind: AssignmentKind::Alternate,
            days_worked: 2,
        }
    );
    assert!(s.events().contains(&ScheduleEvent::Understaffed {
        day: Day::Monday,
        shift: ShiftType::Afternoon,
        current: 1,
    }));
}

#[test]
fn alternate_skips_full_shifts_in_canonical_order() {
    let s = run(vec![
        Employee::new("Ann").prefer(Day::Monday, ShiftType::Morning),
        Employee::new("Bob").prefer(Day::Monday, ShiftType::Morning),
        Employee::new("Cid").prefer(Day::Monday, ShiftType::Afternoon),
        Employee::new("Dan").prefer(Day::Monday, ShiftType::Afternoon),
        Employee::new("Eve").prefer(Day::Monday, ShiftType::Afternoon),
    ]);
    let monday = s.schedule().day(Day::Monday);
    assert_eq!(monday.works("Eve"), Some(ShiftType::Evening));
}

#[test]
fn no_alternate_leaves_employee_unassigned() {
    let s = run(vec![
        Employee::new("Ann").prefer(Day::Monday, ShiftType::Morning),
        Employee::new("Bob").prefer(Day::Monday, ShiftType::Morning),
        Employee::new("Cid").prefer(Day::Monday, ShiftType::Afternoon),
        Employee::new("Dan").prefer(Day::Monday, ShiftType::Afternoon),
        Employee::new("Eve").prefer(Day::Monday, ShiftType::Evening),
        Employee::new("Fay").prefer(Day::Monday, ShiftType::Evening),
        Employee::new("Gus").prefer(Day::Monday, ShiftType::Morning),
    ]);

    assert!(s.events().contains(&ScheduleEvent::NoAlternate {
        employee: "Gus".into(),
        day: Day::Monday,
    }));
    assert_eq!(s.schedule().day(Day::Monday).works("Gus"), None);
    // vendredi et samedi seulement, quand les six autres sont au plafond
    assert_eq!(s.find_employee("Gus").unwrap().days_worked(), 2);
}

#[test]
fn seeded_runs_are_identical() {
    let build = |seed| {
        let mut s = Scheduler::new();
        s.add_employees(load_roster(RosterSource::WithPreferences))
            .unwrap();
        s.run(&mut RandomPicker::seeded(seed)).unwrap();
        s
    };
    let a = build(42);
    let b = build(42);
    assert_eq!(a.schedule(), b.schedule());
    assert_eq!(a.events(), b.events());
    let totals = |s: &Scheduler| -> Vec<u8> { s.employees().iter().map(|e| e.days_worked()).collect() };
    assert_eq!(totals(&a), totals(&b));
}

#[test]
fn employees_from_a_finished_week_start_fresh() {
    let first = run(load_roster(RosterSource::WithoutPreferences));
    assert!(first.employees().iter().all(|e| e.days_worked() == 5));

    let mut next = Scheduler::with_options(ScheduleOptions {
        min_per_shift: 2,
        max_days_per_week: 3,
    })
    .unwrap();
    next.add_employees(first.employees().to_vec()).unwrap();
    assert!(next.employees().iter().all(|e| e.days_worked() == 0 && !e.has_shift_today()));

    next.run(&mut SequencePicker::first_available()).unwrap();
    assert!(next.employees().iter().all(|e| e.days_worked() == 3));
    let filled: usize = next.schedule().iter().map(|(_, _, names)| names.len()).sum();
    assert_eq!(filled, 18);
}

#[test]
fn session_rejects_bad_input() {
    assert!(matches!(
        Scheduler::with_options(ScheduleOptions {
            min_per_shift: 2,
            max_days_per_week: 8,
        }),
        Err(SchedError::InvalidOptions(_))
    ));
    assert!(matches!(
        Scheduler::with_options(ScheduleOptions {
            min_per_shift: 0,
            max_days_per_week: 5,
        }),
        Err(SchedError::InvalidOptions(_))
    ));

    let mut s = Scheduler::new();
    assert!(matches!(
        s.add_employees(vec![Employee::new("Ann"), Employee::new("Ann")]),
        Err(SchedError::DuplicateEmployee(name)) if name == "Ann"
    ));
    assert!(matches!(
        s.add_employees(vec![Employee::new("  ")]),
        Err(SchedError::EmptyName)
    ));
    assert!(s.employees().is_empty());

    s.add_employees(vec![Employee::new("Ann")]).unwrap();
    s.run(&mut SequencePicker::first_available()).unwrap();
    assert!(s.is_completed());
    assert!(matches!(
        s.run(&mut SequencePicker::first_available()),
        Err(SchedError::AlreadyRun)
    ));
    assert!(matches!(
        s.add_employees(vec![Employee::new("Bob")]),
        Err(SchedError::AlreadyRun)
    ));
}

#[test]
fn idle_employees_are_reported() {
    let mut s = Scheduler::with_options(ScheduleOptions {
        min_per_shift: 1,
        max_days_per_week: 7,
    })
    .unwrap();
    s.add_employees(vec![
        Employee::new("Ann"),
        Employee::new("Bob"),
        Employee::new("Cid"),
        Employee::new("Dan"),
    ])
    .unwrap();
    s.run(&mut SequencePicker::first_available()).unwrap();

    let idle: Vec<&str> = s.idle_employees().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(idle, ["Dan"]);
    assert_eq!(s.find_employee("Ann").unwrap().days_worked(), 7);
}
