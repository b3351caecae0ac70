mod assignment;
mod backfill;
mod picker;
mod types;
mod util;

pub use picker::{FillerPicker, RandomPicker, SequencePicker};
pub use types::{AssignmentKind, SchedError, ScheduleEvent, ScheduleOptions};

use crate::model::{Day, Employee, WeeklySchedule};
use std::collections::HashSet;

/// Scheduler : session de planification d'une semaine.
///
/// Possède le roster, le planning et la trace ; rien n'est global, deux
/// sessions sont totalement indépendantes.
#[derive(Debug, Default)]
pub struct Scheduler {
    opts: ScheduleOptions,
    employees: Vec<Employee>,
    schedule: WeeklySchedule,
    events: Vec<ScheduleEvent>,
    completed: bool,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: ScheduleOptions) -> Result<Self, SchedError> {
        opts.validate()?;
        Ok(Self {
            opts,
            ..Self::default()
        })
    }

    pub fn options(&self) -> ScheduleOptions {
        self.opts
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn find_employee(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name == name)
    }

    /// Inscrit des employés ; l'ordre d'inscription départage les égalités.
    /// Les compteurs hérités d'une autre session sont remis à zéro.
    pub fn add_employees(&mut self, mut employees: Vec<Employee>) -> Result<(), SchedError> {
        if self.completed {
            return Err(SchedError::AlreadyRun);
        }
        let mut seen: HashSet<String> = self.employees.iter().map(|e| e.name.clone()).collect();
        for emp in &employees {
            if emp.name.trim().is_empty() {
                return Err(SchedError::EmptyName);
            }
            if !seen.insert(emp.name.clone()) {
                return Err(SchedError::DuplicateEmployee(emp.name.clone()));
            }
        }
        for emp in employees.iter_mut() {
            emp.reset_week();
        }
        self.employees.extend(employees);
        Ok(())
    }

    /// Planifie toute la semaine, jour par jour dans l'ordre canonique.
    pub fn run(&mut self, picker: &mut dyn FillerPicker) -> Result<(), SchedError> {
        if self.completed {
            return Err(SchedError::AlreadyRun);
        }
        for day in Day::ALL {
            self.schedule_day(day, picker);
        }
        self.completed = true;
        Ok(())
    }

    /// Employés qui n'ont travaillé aucun jour.
    pub fn idle_employees(&self) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.days_worked() == 0)
            .collect()
    }

    fn schedule_day(&mut self, day: Day, picker: &mut dyn FillerPicker) {
        for emp in self.employees.iter_mut() {
            emp.start_day();
        }
        assignment::preference_pass(self, day);
        backfill::fill_minimums(self, day, picker);
    }
}
