use super::{AssignmentKind, FillerPicker, ScheduleEvent, Scheduler};
use crate::model::{Day, ShiftType};

/// Complète chaque créneau jusqu'au plancher avec des employés tirés au sort.
/// Un créneau peut rester en sous-effectif : c'est tracé, pas une erreur.
pub(super) fn fill_minimums(scheduler: &mut Scheduler, day: Day, picker: &mut dyn FillerPicker) {
    for shift in ShiftType::ALL {
        while scheduler.has_room(day, shift) {
            let current = scheduler.schedule.staffed(day, shift);
            scheduler.record(ScheduleEvent::BelowMinimum {
                day,
                shift,
                current,
            });

            let fillers = scheduler.available_fillers();
            if fillers.is_empty() {
                scheduler.record(ScheduleEvent::Understaffed {
                    day,
                    shift,
                    current,
                });
                break;
            }

            let chosen = fillers[picker.pick(fillers.len()) % fillers.len()];
            if !scheduler.assign(chosen, day, shift, AssignmentKind::Filler) {
                break;
            }
        }
    }
}
