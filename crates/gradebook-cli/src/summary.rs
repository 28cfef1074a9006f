//! Table rendering for the interactive session.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use gradebook_model::{GradingPolicy, Student};
use gradebook_report::format_grade;
use gradebook_store::{MODIFICATION_LIMIT, RosterStore};

/// Print roster statistics followed by the full student listing.
pub fn print_roster(store: &RosterStore) {
    let stats = store.stats();
    let counts = store.standing_counts();

    let mut metrics = Table::new();
    metrics.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut metrics);
    align_column(&mut metrics, 1, CellAlignment::Right);
    metrics.add_row(vec![Cell::new("Students"), Cell::new(store.len())]);
    metrics.add_row(vec![
        Cell::new("Average"),
        Cell::new(format!("{:.2}", stats.average)),
    ]);
    metrics.add_row(vec![
        Cell::new("Highest"),
        Cell::new(format_grade(stats.high)),
    ]);
    metrics.add_row(vec![
        Cell::new("Lowest"),
        Cell::new(format_grade(stats.low)),
    ]);
    metrics.add_row(vec![Cell::new("Passed"), Cell::new(counts.passed)]);
    metrics.add_row(vec![Cell::new("Failed"), Cell::new(counts.failed)]);
    println!("{metrics}");

    let students: Vec<&Student> = store.students().iter().collect();
    println!("{}", roster_table(store, &students));
}

/// Print the records matching a search, or a notice when nothing matched.
pub fn print_search_results(store: &RosterStore, hits: &[&Student]) {
    if hits.is_empty() {
        println!("No students match that search.");
        return;
    }
    println!("{}", roster_table(store, hits));
}

/// Render a listing of the given records: name, grade, standing, and
/// modifications used.
pub fn roster_table(store: &RosterStore, students: &[&Student]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Grade"),
        header_cell("Standing"),
        header_cell("Modifications"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for student in students {
        table.add_row(vec![
            Cell::new(&student.name),
            Cell::new(format_grade(student.grade)),
            Cell::new(store.classify(student)),
            Cell::new(format!(
                "{} / {}",
                store.attempts_used(&student.name),
                MODIFICATION_LIMIT
            )),
        ]);
    }
    table
}

/// Print the effective grading policy.
pub fn print_policy(policy: GradingPolicy) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Minimum grade"),
        Cell::new(format_grade(policy.min_grade)),
    ]);
    table.add_row(vec![
        Cell::new("Maximum grade"),
        Cell::new(format_grade(policy.max_grade)),
    ]);
    table.add_row(vec![
        Cell::new("Pass threshold"),
        Cell::new(format_grade(policy.pass_threshold)),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
