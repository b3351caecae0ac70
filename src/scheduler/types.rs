use crate::model::{Day, ShiftType};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Options de planification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOptions {
    /// Plancher d'effectif par créneau (et plafond de la passe préférences).
    pub min_per_shift: usize,
    /// Plafond de jours travaillés dans la semaine.
    pub max_days_per_week: u8,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            min_per_shift: 2,
            max_days_per_week: 5,
        }
    }
}

impl ScheduleOptions {
    pub fn validate(&self) -> Result<(), SchedError> {
        if self.min_per_shift == 0 {
            return Err(SchedError::InvalidOptions("min_per_shift must be > 0"));
        }
        if !(1..=7).contains(&self.max_days_per_week) {
            return Err(SchedError::InvalidOptions(
                "max_days_per_week must be within 1..=7",
            ));
        }
        Ok(())
    }
}

/// Origine d'une affectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentKind {
    Preferred,
    Alternate,
    Filler,
}

/// Trace d'un pas de planification, dans l'ordre où il s'est produit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScheduleEvent {
    Assigned {
        employee: String,
        day: Day,
        shift: ShiftType,
        kind: AssignmentKind,
        days_worked: u8,
    },
    PreferredFull {
        employee: String,
        day: Day,
        shift: ShiftType,
    },
    MaxDaysReached {
        employee: String,
        day: Day,
        days_worked: u8,
    },
    NoAlternate {
        employee: String,
        day: Day,
    },
    BelowMinimum {
        day: Day,
        shift: ShiftType,
        current: usize,
    },
    Understaffed {
        day: Day,
        shift: ShiftType,
        current: usize,
    },
}

impl ScheduleEvent {
    pub fn day(&self) -> Day {
        match self {
            ScheduleEvent::Assigned { day, .. }
            | ScheduleEvent::PreferredFull { day, .. }
            | ScheduleEvent::MaxDaysReached { day, .. }
            | ScheduleEvent::NoAlternate { day, .. }
            | ScheduleEvent::BelowMinimum { day, .. }
            | ScheduleEvent::Understaffed { day, .. } => *day,
        }
    }
}

impl fmt::Display for ScheduleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleEvent::Assigned {
                employee,
                day,
                shift,
                kind: AssignmentKind::Preferred,
                ..
            } => write!(f, "{employee} has been assigned to preferred {shift} shift on {day}."),
            ScheduleEvent::Assigned {
                employee,
                day,
                shift,
                kind: AssignmentKind::Alternate,
                ..
            } => write!(f, "{employee} has been assigned to alternate {shift} shift on {day}."),
            ScheduleEvent::Assigned {
                employee,
                day,
                shift,
                kind: AssignmentKind::Filler,
                ..
            } => write!(f, "{employee} has been randomly assigned to {shift} shift on {day}."),
            ScheduleEvent::PreferredFull {
                employee,
                day,
                shift,
            } => write!(f, "{employee}'s preferred {shift} shift has been filled for {day}."),
            ScheduleEvent::MaxDaysReached {
                employee,
                days_worked,
                ..
            } => write!(
                f,
                "{employee} has worked the maximum days this week ({days_worked})."
            ),
            ScheduleEvent::NoAlternate { employee, day } => write!(
                f,
                "{employee} cannot be assigned to an alternate shift on {day} (all full or already assigned)."
            ),
            ScheduleEvent::BelowMinimum {
                day,
                shift,
                current,
            } => write!(
                f,
                "{shift} shift for {day} has not met the minimum employee count ({current})."
            ),
            ScheduleEvent::Understaffed { day, shift, current } => write!(
                f,
                "No additional employee is available to fill {shift} shift for {day} ({current} assigned)."
            ),
        }
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid options: {0}")]
    InvalidOptions(&'static str),
    #[error("employee name cannot be empty")]
    EmptyName,
    #[error("duplicate employee: {0}")]
    DuplicateEmployee(String),
    #[error("schedule already generated")]
    AlreadyRun,
}
