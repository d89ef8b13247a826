//! CSV encoding of the employee table. Every cell stays a string.

use crate::error::{Result, StoreError};
use roster_core::{Column, Employee, EmployeeTable, CANONICAL_COLUMNS};
use std::collections::HashSet;
use std::io::{Read, Write};

pub fn canonical_headers() -> [&'static str; 4] {
    CANONICAL_COLUMNS.map(Column::header)
}

/// Reads a table with a header row. Missing canonical columns come back
/// empty, unknown columns are dropped, and short rows are padded.
pub fn decode_table<R: Read>(reader: R) -> Result<EmployeeTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(StoreError::EmptyFile);
    }

    // First occurrence wins when a header repeats.
    let mut seen = HashSet::new();
    let positions: Vec<(usize, Column)> = headers
        .iter()
        .enumerate()
        .filter_map(|(idx, header)| Column::from_header(header).map(|column| (idx, column)))
        .filter(|(_, column)| seen.insert(*column))
        .collect();

    let mut table = EmployeeTable::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(StoreError::RowTooLong {
                line: record.position().map(|pos| pos.line()).unwrap_or_default(),
                expected: headers.len(),
                found: record.len(),
            });
        }
        let mut employee = Employee::default();
        for (idx, column) in &positions {
            employee.set(*column, record.get(*idx).unwrap_or_default().to_string());
        }
        table.push(employee);
    }
    Ok(table)
}

/// Writes the header and one line per row, without an index column.
pub fn encode_table<W: Write>(table: &EmployeeTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(canonical_headers())?;
    for employee in table {
        writer.write_record(employee.fields())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn encode_to_vec(table: &EmployeeTable) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    encode_table(table, &mut bytes)?;
    Ok(bytes)
}
