use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pcv_cli::logging::redact_value;
use pcv_cli::pipeline::Conversion;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::DarkGrey)
    } else {
        Cell::new(count).fg(color)
    }
}

/// Prints the files, counts and skipped fields of a conversion to stderr.
pub fn print_conversion_summary(conversion: &Conversion) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Kind"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(&conversion.variant_file),
        Cell::new("Variant"),
        Cell::new(conversion.variant_rows),
    ]);
    table.add_row(vec![
        Cell::new(&conversion.casedata_file),
        Cell::new("CaseData"),
        Cell::new(conversion.casedata_rows),
    ]);
    eprintln!("{table}");

    let mut totals = Table::new();
    totals.set_header(vec![
        header_cell("Items"),
        header_cell("Observations"),
        header_cell("Skipped fields"),
    ]);
    apply_table_style(&mut totals);
    totals.add_row(vec![
        Cell::new(conversion.document.items().len()).fg(Color::Cyan),
        Cell::new(conversion.observation_count()),
        count_cell(conversion.diagnostics.len(), Color::Yellow),
    ]);
    eprintln!("{totals}");

    if conversion.diagnostics.is_empty() {
        return;
    }
    let mut skipped = Table::new();
    skipped.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut skipped);
    align_column(&mut skipped, 0, CellAlignment::Right);
    for entry in conversion.diagnostics.entries() {
        skipped.add_row(vec![
            Cell::new(entry.row),
            Cell::new(&entry.column),
            Cell::new(redact_value(&entry.value)).fg(Color::DarkGrey),
            Cell::new(&entry.message).fg(Color::Yellow),
        ]);
    }
    eprintln!("{skipped}");
}

/// Prints validation errors, one per row.
pub fn print_errors(errors: &[String]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Validation error")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, error) in errors.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(error).fg(Color::Red),
        ]);
    }
    eprintln!("{table}");
}
