use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use trademap_model::{FieldDefinition, OperatorKind};
use trademap_validate::{Issue, Severity};

use crate::types::{MappingRow, TransformRun};

/// Run header, per-run counts and a table of findings.
pub fn transform_summary(run: &TransformRun) -> String {
    let mut out = format!(
        "Config: {}\nModel: {}\nInput: {}\n",
        run.config_id,
        run.model_id,
        run.input.display()
    );
    if let Some(path) = &run.output {
        out.push_str(&format!("Output: {}\n", path.display()));
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Succeeded"),
        header_cell("Failed"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(run.records.len()).add_attribute(Attribute::Bold),
        Cell::new(run.succeeded()),
        count_cell(run.failed(), Color::Red),
        count_cell(run.warning_count(), Color::Yellow),
    ]);
    out.push_str(&table.to_string());

    let mut issues = Table::new();
    issues.set_header(vec![
        header_cell("Record"),
        header_cell("Severity"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut issues);
    align_column(&mut issues, 0, CellAlignment::Right);
    align_column(&mut issues, 1, CellAlignment::Center);
    let mut rows = 0usize;
    for record in &run.records {
        match &record.result {
            Ok(outcome) => {
                let mut warnings: Vec<&Issue> = outcome.warnings.iter().collect();
                warnings.sort_by_key(|issue| issue.severity());
                for issue in warnings {
                    issues.add_row(vec![
                        Cell::new(record.index),
                        severity_cell(issue.severity()),
                        Cell::new(issue.field()),
                        Cell::new(issue.message()),
                    ]);
                    rows += 1;
                }
            }
            Err(error) => {
                issues.add_row(vec![
                    Cell::new(record.index),
                    Cell::new("FAILED")
                        .fg(Color::Red)
                        .add_attribute(Attribute::Bold),
                    dim_cell("-"),
                    Cell::new(error.to_string()),
                ]);
                rows += 1;
            }
        }
    }
    if rows > 0 {
        out.push_str("\n\nIssues:\n");
        out.push_str(&issues.to_string());
    }
    out
}

pub fn fields_table(fields: &[FieldDefinition]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for field in fields {
        table.add_row(vec![
            Cell::new(&field.name),
            Cell::new(field.data_type),
            flag_cell(field.required),
        ]);
    }
    table.to_string()
}

pub fn mappings_table(rows: &[MappingRow]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Target"),
        header_cell("Transformation"),
        header_cell("Type"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.source),
            Cell::new(&row.target).fg(Color::Blue),
            if row.operator == "-" {
                dim_cell("-")
            } else {
                Cell::new(&row.operator)
            },
            Cell::new(&row.target_type),
            flag_cell(row.required),
        ]);
    }
    table.to_string()
}

pub fn operators_table() -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Name"),
        header_cell("Params"),
        header_cell("Text only"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for kind in OperatorKind::ALL {
        let params = kind.param_names();
        table.add_row(vec![
            Cell::new(kind.as_str()).fg(Color::Blue),
            Cell::new(kind.display_name()),
            if params.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(params.join(", "))
            },
            flag_cell(kind.is_text_only()),
        ]);
    }
    table.to_string()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
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
