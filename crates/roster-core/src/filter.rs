use crate::domain::{normalize_code, Column, Employee};
use crate::table::EmployeeTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sentinel option that disables a filter.
pub const ALL_OPTION: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Blank input and the sentinel select everything; anything else is
    /// normalized like the stored values it is compared against.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == ALL_OPTION {
            return Selection::All;
        }
        Selection::Only(normalize_code(trimmed))
    }

    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL_OPTION,
            Selection::Only(value) => value,
        }
    }

    fn admits(&self, normalized: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => value == normalized,
        }
    }
}

/// Conjunction of the neighborhood and bus line selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub neighborhood: Selection,
    pub bus_line: Selection,
}

impl EmployeeFilter {
    pub fn new(neighborhood: Selection, bus_line: Selection) -> Self {
        Self {
            neighborhood,
            bus_line,
        }
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.neighborhood
            .admits(&employee.normalized(Column::Neighborhood))
            && self.bus_line.admits(&employee.normalized(Column::BusLine))
    }

    pub fn apply(&self, table: &EmployeeTable) -> EmployeeTable {
        table
            .iter()
            .filter(|employee| self.matches(employee))
            .cloned()
            .collect()
    }
}

/// Values offered by the two filter dropdowns, sentinel first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub neighborhoods: Vec<String>,
    pub bus_lines: Vec<String>,
}

pub fn filter_options(table: &EmployeeTable) -> FilterOptions {
    FilterOptions {
        neighborhoods: option_list(table, Column::Neighborhood),
        bus_lines: option_list(table, Column::BusLine),
    }
}

fn option_list(table: &EmployeeTable, column: Column) -> Vec<String> {
    let distinct: BTreeSet<String> = table
        .iter()
        .map(|employee| employee.normalized(column))
        .filter(|value| !value.is_empty())
        .collect();
    std::iter::once(ALL_OPTION.to_string())
        .chain(distinct)
        .collect()
}
