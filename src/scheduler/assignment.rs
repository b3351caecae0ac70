use super::{AssignmentKind, ScheduleEvent, Scheduler};
use crate::model::{Day, ShiftType};

/// Passe déterministe : chaque employé, dans l'ordre d'inscription, tente
/// son créneau préféré du jour puis, s'il est plein, un créneau alternatif.
pub(super) fn preference_pass(scheduler: &mut Scheduler, day: Day) {
    let max_days = scheduler.opts.max_days_per_week;

    for idx in 0..scheduler.employees.len() {
        let emp = &scheduler.employees[idx];

        if emp.days_worked() >= max_days {
            let event = ScheduleEvent::MaxDaysReached {
                employee: emp.name.clone(),
                day,
                days_worked: emp.days_worked(),
            };
            scheduler.record(event);
            continue;
        }
        if emp.has_shift_today() {
            continue;
        }
        let Some(preferred) = emp.preferred_shift(day) else {
            continue;
        };

        if scheduler.has_room(day, preferred) {
            scheduler.assign(idx, day, preferred, AssignmentKind::Preferred);
        } else {
            let event = ScheduleEvent::PreferredFull {
                employee: emp.name.clone(),
                day,
                shift: preferred,
            };
            scheduler.record(event);
            assign_alternate(scheduler, idx, day);
        }
    }
}

/// Premier créneau (ordre canonique, hors préféré) encore sous le plancher.
pub(super) fn assign_alternate(scheduler: &mut Scheduler, idx: usize, day: Day) -> bool {
    let preferred = scheduler.employees[idx].preferred_shift(day);

    for shift in ShiftType::ALL {
        if Some(shift) == preferred {
            continue;
        }
        if scheduler.has_room(day, shift)
            && !scheduler.employees[idx].has_shift_today()
            && scheduler.assign(idx, day, shift, AssignmentKind::Alternate)
        {
            return true;
        }
    }

    let event = ScheduleEvent::NoAlternate {
        employee: scheduler.employees[idx].name.clone(),
        day,
    };
    scheduler.record(event);
    false
}
