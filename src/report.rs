use crate::model::{Day, Employee, ShiftType, WeeklySchedule};
use crate::scheduler::{ScheduleEvent, Scheduler};
use std::fmt::Write;

/// Permet de customiser le rendu final (texte, markdown, etc.).
pub trait ReportRenderer {
    fn render_schedule(&self, schedule: &WeeklySchedule) -> String;
    fn render_summary(&self, employees: &[Employee]) -> String;
}

/// Rendu texte simple pour la console.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl ReportRenderer for TextReport {
    fn render_schedule(&self, schedule: &WeeklySchedule) -> String {
        let mut out = String::from("--- Weekly Employee Shift Schedule ---\n");
        for day in Day::ALL {
            let _ = writeln!(out, "\n{day}:");
            for shift in ShiftType::ALL {
                let names = schedule.assigned(day, shift);
                if names.is_empty() {
                    let _ = writeln!(out, "  {shift}: No employees assigned. (Total: 0)");
                } else {
                    let _ = writeln!(
                        out,
                        "  {shift}: {} (Total: {})",
                        names.join(", "),
                        names.len()
                    );
                }
            }
        }
        out
    }

    fn render_summary(&self, employees: &[Employee]) -> String {
        let mut out = String::from("--- Employee total shifts summary ---\n");
        for emp in employees {
            let _ = writeln!(out, "{} worked {} days.", emp.name, emp.days_worked());
        }
        out
    }
}

/// Trace ligne à ligne, regroupée par jour.
pub fn render_trace(events: &[ScheduleEvent]) -> String {
    let mut out = String::new();
    for day in Day::ALL {
        let _ = writeln!(out, "Scheduling shifts for {day}:");
        for event in events.iter().filter(|e| e.day() == day) {
            let _ = writeln!(out, "  {event}");
        }
    }
    out
}

/// Planning, totaux puis employés jamais affectés.
pub fn render_report(scheduler: &Scheduler, renderer: &dyn ReportRenderer) -> String {
    let mut out = renderer.render_schedule(scheduler.schedule());
    out.push('\n');
    out.push_str(&renderer.render_summary(scheduler.employees()));

    let idle = scheduler.idle_employees();
    if !idle.is_empty() {
        out.push_str("\nNote: the following employees were not assigned this week:\n");
        for emp in idle {
            let _ = writeln!(out, "- {}", emp.name);
        }
    }
    out
}
