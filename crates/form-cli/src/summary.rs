use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use form_core::FormSession;
use form_model::{CalculationResult, FormDefinition, Readiness, ValidationError};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_field_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

/// One row per form definition.
pub fn forms_table(forms: &[FormDefinition]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Form"),
        header_cell("Title"),
        header_cell("Fields"),
        header_cell("Dependencies"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for form in forms {
        table.add_row(vec![
            Cell::new(&form.id).add_attribute(Attribute::Bold),
            Cell::new(&form.title),
            Cell::new(form.fields.len()),
            count_cell(form.dependencies.len()),
        ]);
    }
    table
}

/// Current state of every field in a session.
pub fn fields_table(session: &FormSession) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Value"),
        header_cell("Rules"),
        header_cell("Range"),
        header_cell("State"),
        header_cell("Error"),
    ]);
    apply_field_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for (field, state) in session.fields() {
        let value = if state.value.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(&state.value)
        };
        let rules = field.rule.to_string();
        let range = match session.field_range(&field.name) {
            Some(range) => Cell::new(format!("{}-{} cm", range.min, range.max)),
            None => dim_cell("-"),
        };
        let state_cell = if state.disabled {
            dim_cell("disabled")
        } else {
            Cell::new("enabled").fg(Color::Green)
        };
        let error = match session.field_error(&field.name) {
            Some(message) => Cell::new(message).fg(Color::Red),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&field.name).add_attribute(Attribute::Bold),
            Cell::new(&state.label),
            value,
            if rules.is_empty() { dim_cell("-") } else { Cell::new(rules) },
            range,
            state_cell,
            error,
        ]);
    }
    table
}

pub fn errors_table(errors: &[ValidationError]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Message")]);
    apply_table_style(&mut table);
    for error in errors {
        table.add_row(vec![
            Cell::new(&error.field).add_attribute(Attribute::Bold),
            Cell::new(&error.message).fg(Color::Red),
        ]);
    }
    table
}

pub fn readiness_table(readiness: &Readiness) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Missing input")]);
    apply_table_style(&mut table);
    for missing in &readiness.missing {
        table.add_row(vec![
            Cell::new(&missing.field).add_attribute(Attribute::Bold),
            Cell::new(&missing.message).fg(Color::Yellow),
        ]);
    }
    table
}

pub fn result_table(result: &CalculationResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Item type"), Cell::new(result.item_type)]);
    table.add_row(vec![
        Cell::new("Total yarn"),
        Cell::new(format!("{} g", result.total_quantity)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Packs (50 g)"),
        Cell::new(result.pack_count)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Formula"), dim_cell(&result.formula_trace)]);
    table
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

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
