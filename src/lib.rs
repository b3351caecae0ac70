#![forbid(unsafe_code)]
//! Hebdo — bibliothèque de planification hebdomadaire d'une petite équipe (sans BD).
//!
//! - Trois créneaux par jour (matin, après-midi, soir), sept jours.
//! - Préférences d'abord (ordre d'inscription), puis complément aléatoire au minimum.
//! - Plafond de jours travaillés par semaine.
//! - Aléa injectable (`FillerPicker`) pour des exécutions reproductibles.

#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod report;
pub mod roster;
pub mod scheduler;

pub use model::{Day, DayPlan, Employee, ShiftType, WeeklySchedule};
pub use report::{render_report, render_trace, ReportRenderer, TextReport};
pub use roster::{load_roster, RosterSource};
pub use scheduler::{
    AssignmentKind, FillerPicker, RandomPicker, SchedError, ScheduleEvent, ScheduleOptions,
    Scheduler, SequencePicker,
};
