use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{BundleResult, DatasetResult};

pub fn print_summary(result: &DatasetResult) {
    println!("Output: {}", result.output_dir.display());
    println!("Bundle: {}", result.bundle_path.display());
    if let Some(path) = &result.summary_csv {
        println!("Summary: {} ({} rows)", path.display(), result.summary_rows);
    }
    println!("{}", summary_table(result));
}

pub fn print_bundle_summary(result: &BundleResult) {
    println!("Bundle: {}", result.output.display());
    println!(
        "Resources: {} (skipped files: {})",
        result.resources, result.skipped
    );
}

pub fn summary_table(result: &DatasetResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Folder"),
        header_cell("Patient"),
        header_cell("Accepted"),
        header_cell("Rejected"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for subject in &result.subjects {
        table.add_row(vec![
            Cell::new(&subject.folder)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            subject
                .patient_id
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(subject.accepted),
            count_cell(Some(subject.rejected), Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} patients", result.subjects.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.total_accepted()).add_attribute(Attribute::Bold),
        count_cell(Some(result.total_rejected()), Color::Red).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
