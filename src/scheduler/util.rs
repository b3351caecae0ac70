use super::{AssignmentKind, ScheduleEvent, Scheduler};
use crate::model::{Day, ShiftType};

impl Scheduler {
    /// Ajoute un événement à la trace (et le journalise avec `logging`).
    pub(super) fn record(&mut self, event: ScheduleEvent) {
        trace_event(&event);
        self.events.push(event);
    }

    /// Index (dans le roster) des employés encore disponibles aujourd'hui.
    pub(super) fn available_fillers(&self) -> Vec<usize> {
        let max_days = self.opts.max_days_per_week;
        self.employees
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_available(max_days))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub(super) fn has_room(&self, day: Day, shift: ShiftType) -> bool {
        self.schedule.staffed(day, shift) < self.opts.min_per_shift
    }

    /// Unique point de mutation : compteur, drapeau du jour et planning.
    pub(super) fn assign(
        &mut self,
        idx: usize,
        day: Day,
        shift: ShiftType,
        kind: AssignmentKind,
    ) -> bool {
        let max_days = self.opts.max_days_per_week;
        let emp = &mut self.employees[idx];
        if !emp.take_shift(max_days) {
            return false;
        }
        let employee = emp.name.clone();
        let days_worked = emp.days_worked();
        self.schedule.push(day, shift, employee.clone());
        self.record(ScheduleEvent::Assigned {
            employee,
            day,
            shift,
            kind,
            days_worked,
        });
        true
    }
}

#[cfg(feature = "logging")]
fn trace_event(event: &ScheduleEvent) {
    match event {
        ScheduleEvent::Assigned { .. } => tracing::info!(day = %event.day(), "{event}"),
        ScheduleEvent::Understaffed { .. } => tracing::warn!(day = %event.day(), "{event}"),
        _ => tracing::debug!(day = %event.day(), "{event}"),
    }
}

#[cfg(not(feature = "logging"))]
fn trace_event(_event: &ScheduleEvent) {}
