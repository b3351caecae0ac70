use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Jour de la semaine planifiée (dimanche en tête).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// Ordre canonique de traitement.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Position dans `Day::ALL`.
    pub fn index(self) -> usize {
        match self {
            Day::Sunday => 0,
            Day::Monday => 1,
            Day::Tuesday => 2,
            Day::Wednesday => 3,
            Day::Thursday => 4,
            Day::Friday => 5,
            Day::Saturday => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Weekday> for Day {
    fn from(wd: Weekday) -> Self {
        match wd {
            Weekday::Sun => Day::Sunday,
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
        }
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Sunday => Weekday::Sun,
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
        }
    }
}

/// Accepte les graphies de `chrono::Weekday` (`mon`, `Monday`, ...).
impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Weekday>()
            .map(Day::from)
            .map_err(|_| format!("unknown day: {s}"))
    }
}

/// Type de créneau dans une journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Morning,
    Afternoon,
    Evening,
}

impl ShiftType {
    /// Ordre canonique : repli sur créneau alternatif et complément au minimum.
    pub const ALL: [ShiftType; 3] = [ShiftType::Morning, ShiftType::Afternoon, ShiftType::Evening];

    pub fn index(self) -> usize {
        match self {
            ShiftType::Morning => 0,
            ShiftType::Afternoon => 1,
            ShiftType::Evening => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShiftType::Morning => "Morning",
            ShiftType::Afternoon => "Afternoon",
            ShiftType::Evening => "Evening",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShiftType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" | "am" => Ok(ShiftType::Morning),
            "afternoon" | "pm" => Ok(ShiftType::Afternoon),
            "evening" | "night" => Ok(ShiftType::Evening),
            _ => Err(format!("unknown shift: {s}")),
        }
    }
}

/// Employé et ses préférences (au plus un créneau souhaité par jour).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub preferences: BTreeMap<Day, ShiftType>,
    #[serde(default, skip_deserializing)]
    days_worked: u8,
    #[serde(skip)]
    has_shift_today: bool,
}

impl Employee {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            preferences: BTreeMap::new(),
            days_worked: 0,
            has_shift_today: false,
        }
    }

    /// Ajoute (ou remplace) la préférence du jour.
    pub fn prefer(mut self, day: Day, shift: ShiftType) -> Self {
        self.preferences.insert(day, shift);
        self
    }

    pub fn preferred_shift(&self, day: Day) -> Option<ShiftType> {
        self.preferences.get(&day).copied()
    }

    pub fn days_worked(&self) -> u8 {
        self.days_worked
    }

    pub fn has_shift_today(&self) -> bool {
        self.has_shift_today
    }

    /// Disponible pour un créneau aujourd'hui sous le plafond `max_days`.
    pub fn is_available(&self, max_days: u8) -> bool {
        self.days_worked < max_days && !self.has_shift_today
    }

    /// Remet les compteurs à zéro à l'inscription dans une nouvelle semaine.
    pub(crate) fn reset_week(&mut self) {
        self.days_worked = 0;
        self.has_shift_today = false;
    }

    pub(crate) fn start_day(&mut self) {
        self.has_shift_today = false;
    }

    /// Seul point d'incrément du compteur : refuse au-delà du plafond
    /// ou pour un second créneau dans la journée.
    pub(crate) fn take_shift(&mut self, max_days: u8) -> bool {
        if !self.is_available(max_days) {
            return false;
        }
        self.days_worked += 1;
        self.has_shift_today = true;
        true
    }
}

/// Planning d'une journée : une liste ordonnée de noms par créneau.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    shifts: [Vec<String>; 3],
}

impl DayPlan {
    pub fn shift(&self, shift: ShiftType) -> &[String] {
        &self.shifts[shift.index()]
    }

    pub fn staffed(&self, shift: ShiftType) -> usize {
        self.shifts[shift.index()].len()
    }

    pub fn works(&self, name: &str) -> Option<ShiftType> {
        ShiftType::ALL
            .into_iter()
            .find(|s| self.shift(*s).iter().any(|n| n == name))
    }

    pub(crate) fn push(&mut self, shift: ShiftType, name: String) {
        self.shifts[shift.index()].push(name);
    }
}

/// Planning complet de la semaine, pré-rempli pour chaque (jour, créneau).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    days: [DayPlan; 7],
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Day) -> &DayPlan {
        &self.days[day.index()]
    }

    pub fn assigned(&self, day: Day, shift: ShiftType) -> &[String] {
        self.day(day).shift(shift)
    }

    pub fn staffed(&self, day: Day, shift: ShiftType) -> usize {
        self.day(day).staffed(shift)
    }

    /// Itère `(jour, créneau, noms)` dans l'ordre canonique.
    pub fn iter(&self) -> impl Iterator<Item = (Day, ShiftType, &[String])> + '_ {
        Day::ALL.into_iter().flat_map(move |day| {
            ShiftType::ALL
                .into_iter()
                .map(move |shift| (day, shift, self.assigned(day, shift)))
        })
    }

    pub(crate) fn push(&mut self, day: Day, shift: ShiftType, name: String) {
        self.days[day.index()].push(shift, name);
    }
}
