use crate::model::{Day, Employee, ShiftType};

/// Jeu d'employés à charger pour une exécution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RosterSource {
    /// Six employés sans aucune préférence : tout passe par le tirage.
    #[default]
    WithoutPreferences,
    /// Huit employés, préférences partielles saisies à la main.
    WithPreferences,
}

/// Roster d'exemple, dans l'ordre d'inscription.
pub fn load_roster(source: RosterSource) -> Vec<Employee> {
    match source {
        RosterSource::WithoutPreferences => without_preferences(),
        RosterSource::WithPreferences => with_preferences(),
    }
}

fn without_preferences() -> Vec<Employee> {
    ["Mary", "Kate", "Kevin", "Patrick", "Evan", "Joe"]
        .into_iter()
        .map(Employee::new)
        .collect()
}

fn with_preferences() -> Vec<Employee> {
    use Day::*;
    use ShiftType::*;

    let every = |name: &str, days: &[Day], shift: ShiftType| {
        days.iter()
            .fold(Employee::new(name), |emp, day| emp.prefer(*day, shift))
    };

    vec![
        every("Mary", &[Monday, Tuesday, Wednesday], Morning),
        every("Kate", &[Wednesday, Friday, Saturday], Evening),
        every(
            "Kevin",
            &[Tuesday, Wednesday, Thursday, Saturday, Sunday],
            Afternoon,
        ),
        every("Patrick", &Day::ALL, Morning),
        Employee::new("Evan")
            .prefer(Monday, Evening)
            .prefer(Tuesday, Morning)
            .prefer(Wednesday, Evening)
            .prefer(Thursday, Afternoon)
            .prefer(Friday, Evening),
        Employee::new("Joe"),
        Employee::new("Terril"),
        Employee::new("Nancy"),
    ]
}
