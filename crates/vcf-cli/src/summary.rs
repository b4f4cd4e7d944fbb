use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use vcf_cli::pipeline::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input_path.display());
    println!("Output: {}", summary.output_dir.display());
    if let Some(path) = &summary.normalized_csv {
        println!("Normalized table: {}", path.display());
    }
    if let Some(path) = &summary.archive {
        println!("Archive: {}", path.display());
    }
    if summary.dry_run {
        println!("Dry run: no files were written.");
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Records read"),
        Cell::new(summary.records_read),
    ]);
    table.add_row(vec![
        Cell::new("vCards emitted"),
        count_cell(summary.emitted, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Skipped (no name)"),
        count_cell(summary.skipped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Batch files"),
        Cell::new(summary.unit_count),
    ]);
    println!("{table}");
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
