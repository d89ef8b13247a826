use roster_core::{CategoryCount, Column, Employee, CANONICAL_COLUMNS};

const BLANK_LABEL: &str = "(blank)";
const COUNT_HEADER: &str = "Quantidade";

/// Left-aligned columns separated by two spaces. Widths count chars, not
/// bytes, so accented names line up.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().copied(), &widths);
    for row in rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (idx, (cell, width)) in cells.zip(widths).enumerate() {
        if idx > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn employee_table(employees: &[Employee]) -> String {
    let headers = CANONICAL_COLUMNS.map(Column::header);
    let rows: Vec<Vec<String>> = employees
        .iter()
        .map(|employee| employee.fields().iter().map(|f| f.to_string()).collect())
        .collect();
    render_table(&headers, &rows)
}

pub fn count_table(column: Column, counts: &[CategoryCount]) -> String {
    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|item| vec![category_label(&item.category), item.count.to_string()])
        .collect();
    render_table(&[column.header(), COUNT_HEADER], &rows)
}

pub fn category_label(category: &str) -> String {
    if category.is_empty() {
        BLANK_LABEL.to_string()
    } else {
        category.to_string()
    }
}
