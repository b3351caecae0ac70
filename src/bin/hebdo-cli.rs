#![forbid(unsafe_code)]
use anyhow::Result;
use hebdo::{
    io,
    model::Employee,
    report::{render_report, render_trace, TextReport},
    roster::{load_roster, RosterSource},
    scheduler::{FillerPicker, RandomPicker, ScheduleOptions, Scheduler},
};
use clap::Parser;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planning hebdomadaire (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long)]
    log: bool,

    /// Roster d'exemple à planifier
    #[arg(long, value_enum, default_value_t = RosterSource::WithoutPreferences)]
    roster: RosterSource,

    /// Fichier d'employés (CSV `name,preferences` ou JSON), remplace `--roster`
    #[arg(long)]
    employees: Option<String>,

    /// Graine du tirage des remplaçants (exécution reproductible)
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 2)]
    min_per_shift: usize,

    #[arg(long, default_value_t = 5)]
    max_days: u8,

    /// Export JSON du planning
    #[arg(long)]
    out_json: Option<String>,

    /// Export CSV du planning
    #[arg(long)]
    out_csv: Option<String>,

    /// N'affiche pas la trace de planification
    #[arg(long)]
    quiet: bool,
}

fn load_employees(cli: &Cli) -> Result<Vec<Employee>> {
    match &cli.employees {
        Some(path) if is_json(path) => io::import_employees_json(path),
        Some(path) => io::import_employees_csv(path),
        None => Ok(load_roster(cli.roster)),
    }
}

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let employees = load_employees(&cli)?;
    let mut scheduler = Scheduler::with_options(ScheduleOptions {
        min_per_shift: cli.min_per_shift,
        max_days_per_week: cli.max_days,
    })?;

    println!("--- Employees and their schedule preferences ---");
    for emp in &employees {
        let prefs: Vec<String> = emp
            .preferences
            .iter()
            .map(|(day, shift)| format!("{day}: {shift}"))
            .collect();
        if prefs.is_empty() {
            println!("{}: no preferences", emp.name);
        } else {
            println!("{}: {}", emp.name, prefs.join(", "));
        }
    }
    scheduler.add_employees(employees)?;

    let mut picker: Box<dyn FillerPicker> = match cli.seed {
        Some(seed) => Box::new(RandomPicker::seeded(seed)),
        None => Box::new(RandomPicker::from_entropy()),
    };
    scheduler.run(picker.as_mut())?;

    if !cli.quiet {
        println!("\n--- Generating schedule ---");
        print!("{}", render_trace(scheduler.events()));
    }
    println!();
    print!("{}", render_report(&scheduler, &TextReport));

    if let Some(path) = &cli.out_json {
        io::export_schedule_json(Path::new(path), &scheduler)?;
    }
    if let Some(path) = &cli.out_csv {
        io::export_schedule_csv(Path::new(path), &scheduler)?;
    }
    Ok(())
}
