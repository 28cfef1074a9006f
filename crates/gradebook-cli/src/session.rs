//! The interactive roster session.
//!
//! One menu action maps to one store operation; the store answers
//! synchronously and the result is rendered immediately. The roster lives
//! only as long as this loop.

use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use gradebook_model::GradingPolicy;
use gradebook_report::{format_grade, write_report};
use gradebook_store::{MODIFICATION_LIMIT, ModifyOutcome, RosterStore};

use crate::summary;

const MENU: [&str; 8] = [
    "Show roster",
    "Add student",
    "Modify grade",
    "Delete student",
    "Search students",
    "Export CSV report",
    "Reset roster",
    "Quit",
];

pub fn run_session(store: &mut RosterStore, output_dir: &Path) -> Result<()> {
    let policy = store.policy();
    println!("Gradebook - interactive roster session");
    println!(
        "Grading scale {} to {}, pass mark {}.",
        policy.min_grade, policy.max_grade, policy.pass_threshold
    );
    let theme = ColorfulTheme::default();
    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Choose an action")
            .items(&MENU)
            .default(0)
            .interact()?;
        match choice {
            0 => show_roster(store),
            1 => add_student(store, &theme)?,
            2 => modify_grade(store, &theme)?,
            3 => delete_student(store, &theme)?,
            4 => search_students(store, &theme)?,
            5 => export_report(store, output_dir)?,
            6 => reset_roster(store, &theme)?,
            _ => break,
        }
    }
    println!("Session closed; roster discarded.");
    Ok(())
}

fn show_roster(store: &RosterStore) {
    if store.is_empty() {
        println!("No students yet. Add one first.");
        return;
    }
    summary::print_roster(store);
}

fn add_student(store: &mut RosterStore, theme: &ColorfulTheme) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Student name")
        .allow_empty(true)
        .interact_text()?;
    let grade = prompt_grade(store.policy(), theme, "Grade")?;
    match store.add(name.trim(), grade) {
        Ok(()) => println!("Added '{}' with grade {grade}.", name.trim()),
        Err(error) => println!("error: {error}"),
    }
    Ok(())
}

fn modify_grade(store: &mut RosterStore, theme: &ColorfulTheme) -> Result<()> {
    if store.is_empty() {
        println!("No students to modify.");
        return Ok(());
    }
    let Some(name) = select_student(store, theme, "Select the student to modify")? else {
        return Ok(());
    };
    let used = store.attempts_used(&name);
    println!("Modification attempts for '{name}': {used} / {MODIFICATION_LIMIT}");
    if store.attempts_remaining(&name) == 0 {
        println!("error: the modification limit for '{name}' has been reached.");
        return Ok(());
    }
    let current = store
        .get(&name)
        .map(|student| student.grade)
        .unwrap_or_default();
    let prompt = format!("New grade for {name} (current: {})", format_grade(current));
    let grade = prompt_grade(store.policy(), theme, &prompt)?;
    match store.modify(&name, grade) {
        Ok(ModifyOutcome::Updated { remaining }) => {
            println!("Grade for '{name}' updated. Remaining attempts: {remaining}");
        }
        Ok(ModifyOutcome::Unchanged) => {
            println!("The new grade equals the current one. Nothing changed.");
        }
        Err(error) => println!("error: {error}"),
    }
    Ok(())
}

fn delete_student(store: &mut RosterStore, theme: &ColorfulTheme) -> Result<()> {
    if store.is_empty() {
        println!("No students to delete.");
        return Ok(());
    }
    let Some(name) = select_student(store, theme, "Select the student to DELETE")? else {
        return Ok(());
    };
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!(
            "Permanently delete {name}? This cannot be undone"
        ))
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }
    match store.delete(&name) {
        Ok(student) => println!("Deleted '{}'.", student.name),
        Err(error) => println!("error: {error}"),
    }
    Ok(())
}

fn search_students(store: &RosterStore, theme: &ColorfulTheme) -> Result<()> {
    if store.is_empty() {
        println!("No students to search.");
        return Ok(());
    }
    let term: String = Input::with_theme(theme)
        .with_prompt("Search term (empty shows everyone)")
        .allow_empty(true)
        .interact_text()?;
    let hits = store.search(&term);
    summary::print_search_results(store, &hits);
    Ok(())
}

fn export_report(store: &RosterStore, output_dir: &Path) -> Result<()> {
    let path = write_report(store, output_dir).context("export CSV report")?;
    println!(
        "Exported {} student(s) to {}.",
        store.len(),
        path.display()
    );
    Ok(())
}

fn reset_roster(store: &mut RosterStore, theme: &ColorfulTheme) -> Result<()> {
    let confirmed = Confirm::with_theme(theme)
        .with_prompt("Clear every student and all modification tallies?")
        .default(false)
        .interact()?;
    if confirmed {
        store.reset_all();
        println!("Roster cleared.");
    }
    Ok(())
}

/// Pick a student by name from the current roster. Esc cancels.
fn select_student(
    store: &RosterStore,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<String>> {
    let names: Vec<&str> = store
        .students()
        .iter()
        .map(|student| student.name.as_str())
        .collect();
    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&names)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|index| names[index].to_string()))
}

/// Prompt for a grade, holding the caller to the policy range at the input
/// boundary.
fn prompt_grade(policy: GradingPolicy, theme: &ColorfulTheme, prompt: &str) -> Result<f64> {
    let grade = Input::with_theme(theme)
        .with_prompt(format!(
            "{prompt} ({} - {})",
            policy.min_grade, policy.max_grade
        ))
        .validate_with(|value: &f64| -> Result<(), String> {
            if policy.contains(*value) {
                Ok(())
            } else {
                Err(format!(
                    "grade must be between {} and {}",
                    policy.min_grade, policy.max_grade
                ))
            }
        })
        .interact_text()?;
    Ok(grade)
}
