use crate::model::{Day, Employee, ShiftType};
use crate::scheduler::{ScheduleEvent, Scheduler};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV: header `name[,preferences]`,
/// préférences au format `day:shift;day:shift` (ex. `mon:morning;fri:evening`).
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid employee row (empty name)");
        }
        let mut employee = Employee::new(name);
        if let Some(raw) = rec.get(1) {
            let raw = raw.trim();
            if !raw.is_empty() {
                employee.preferences = parse_preferences(raw)
                    .with_context(|| format!("invalid preferences for employee {name}"))?;
            }
        }
        out.push(employee);
    }
    ensure_unique(&out)?;
    Ok(out)
}

/// Import d'employés depuis un tableau JSON de `Employee`.
pub fn import_employees_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let employees: Vec<Employee> = serde_json::from_slice(&data)
        .with_context(|| format!("parsing employees {}", path.display()))?;
    ensure_unique(&employees)?;
    Ok(employees)
}

fn ensure_unique(employees: &[Employee]) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for emp in employees {
        if !seen.insert(emp.name.as_str()) {
            bail!("duplicate employee name: {}", emp.name);
        }
    }
    Ok(())
}

fn parse_preferences(raw: &str) -> anyhow::Result<BTreeMap<Day, ShiftType>> {
    let mut out = BTreeMap::new();
    for chunk in raw.split(';').map(str::trim).filter(|c| !c.is_empty()) {
        let (day_raw, shift_raw) = chunk
            .split_once(':')
            .with_context(|| format!("expected day:shift, got {chunk}"))?;
        let day: Day = day_raw.parse().map_err(anyhow::Error::msg)?;
        let shift: ShiftType = shift_raw.parse().map_err(anyhow::Error::msg)?;
        if out.insert(day, shift).is_some() {
            bail!("more than one preference for {day}");
        }
    }
    Ok(out)
}

#[derive(Serialize)]
struct WorkTotal<'a> {
    name: &'a str,
    days_worked: u8,
}

#[derive(Serialize)]
struct ScheduleExport<'a> {
    schedule: BTreeMap<Day, BTreeMap<ShiftType, &'a [String]>>,
    days_worked: Vec<WorkTotal<'a>>,
    events: &'a [ScheduleEvent],
}

/// Export JSON du planning, des totaux et de la trace (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, scheduler: &Scheduler) -> anyhow::Result<()> {
    let mut schedule: BTreeMap<Day, BTreeMap<ShiftType, &[String]>> = BTreeMap::new();
    for (day, shift, names) in scheduler.schedule().iter() {
        schedule.entry(day).or_default().insert(shift, names);
    }
    let export = ScheduleExport {
        schedule,
        days_worked: scheduler
            .employees()
            .iter()
            .map(|e| WorkTotal {
                name: &e.name,
                days_worked: e.days_worked(),
            })
            .collect(),
        events: scheduler.events(),
    };
    let s = serde_json::to_string_pretty(&export)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du planning: header `day,shift,position,employee`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, scheduler: &Scheduler) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "shift", "position", "employee"])?;
    for (day, shift, names) in scheduler.schedule().iter() {
        for (pos, name) in names.iter().enumerate() {
            let pos = (pos + 1).to_string();
            w.write_record([day.name(), shift.name(), pos.as_str(), name.as_str()])?;
        }
    }
    w.flush()?;
    Ok(())
}
