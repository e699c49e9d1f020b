use std::path::Path;

use clap::Parser;
use gradebook::utils::{logger, validation::Validate};
use gradebook::{
    compute_group_stats, csv_store, sort_students, top_students, CliConfig, Command, GroupStats,
    Result, Roster, SortStrategy, Student,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gradebook CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!("Operation failed: {}", e);
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

// All business logic lives in the library; this shell only loads, calls and
// prints.
fn run(config: &CliConfig) -> Result<()> {
    match &config.command {
        Command::List { sort } => {
            let students = csv_store::load_students(&config.roster)?;
            let sorted = sort_students(&students, SortStrategy::from_token(sort));
            print_table(&sorted);
        }

        Command::Stats => {
            let students = csv_store::load_students(&config.roster)?;
            print_stats(&compute_group_stats(&students));
        }

        Command::Add { id, name, grades } => {
            let mut roster = load_roster_or_empty(&config.roster)?;
            let student = Student::new(*id, name, grades)?;
            roster.add(student)?;
            csv_store::save_students(&config.roster, roster.students())?;
            println!("Student added ({} in roster).", roster.len());
        }

        Command::Remove { id } => {
            let mut roster = Roster::from_students(csv_store::load_students(&config.roster)?);
            let removed = roster.remove(*id)?;
            csv_store::save_students(&config.roster, roster.students())?;
            println!("Removed {removed}.");
        }

        Command::SetGrades { id, grades } => {
            let mut roster = Roster::from_students(csv_store::load_students(&config.roster)?);
            roster.replace_grades(*id, grades)?;
            csv_store::save_students(&config.roster, roster.students())?;
            println!("Grades updated.");
        }

        Command::ExportTop { n, output } => {
            let students = csv_store::load_students(&config.roster)?;
            let top = top_students(&students, *n);
            csv_store::export_top_report(output, &top)?;
            println!("Exported {} records to {}.", top.len(), output);
        }
    }

    Ok(())
}

// Mutating commands may start from a missing file; reading ones must not.
fn load_roster_or_empty(path: &str) -> Result<Roster> {
    if Path::new(path).exists() {
        Ok(Roster::from_students(csv_store::load_students(path)?))
    } else {
        tracing::debug!("roster file {} not found, starting empty", path);
        Ok(Roster::new())
    }
}

fn print_table(students: &[Student]) {
    if students.is_empty() {
        println!("Roster is empty.");
        return;
    }

    println!("{:<5} {:<25} {:<10} Grades", "ID", "Name", "Average");
    println!("{}", "-".repeat(60));
    for student in students {
        let grades: Vec<String> = student.grades().iter().map(u8::to_string).collect();
        println!(
            "{:<5} {:<25} {:<10.2} [{}]",
            student.id(),
            student.name(),
            student.average_grade(),
            grades.join(", ")
        );
    }
    println!("{}", "-".repeat(60));
    println!("Total: {}", students.len());
}

fn print_stats(stats: &GroupStats<'_>) {
    if stats.count == 0 {
        println!("No data for statistics.");
        return;
    }

    println!("Students:        {}", stats.count);
    println!("Overall average: {:.2}", stats.overall_average);
    if let Some(best) = stats.best_student {
        println!("Best student:    {} ({:.2})", best.name(), best.average_grade());
    }
    if let Some(worst) = stats.worst_student {
        println!("Worst student:   {} ({:.2})", worst.name(), worst.average_grade());
    }
}
