use crate::domain::text::{normalize_badge_id, normalize_code, normalize_name};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Name,
    BadgeId,
    Neighborhood,
    BusLine,
}

/// Column order of every table, in memory and on disk.
pub const CANONICAL_COLUMNS: [Column; 4] = [
    Column::Name,
    Column::BadgeId,
    Column::Neighborhood,
    Column::BusLine,
];

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Nome",
            Column::BadgeId => "Matrícula",
            Column::Neighborhood => "Bairro",
            Column::BusLine => "Ônibus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::BadgeId => "badge id",
            Column::Neighborhood => "neighborhood",
            Column::BusLine => "bus line",
        }
    }

    /// Matches a CSV header cell, ignoring a byte-order mark and padding.
    pub fn from_header(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_matches('\u{feff}').trim();
        CANONICAL_COLUMNS
            .into_iter()
            .find(|column| column.header() == trimmed)
    }

    pub fn normalize(self, value: &str) -> String {
        match self {
            Column::Name => normalize_name(value),
            Column::BadgeId => normalize_badge_id(value),
            Column::Neighborhood | Column::BusLine => normalize_code(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub badge_id: String,
    pub neighborhood: String,
    pub bus_line: String,
}

impl Employee {
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::BadgeId => &self.badge_id,
            Column::Neighborhood => &self.neighborhood,
            Column::BusLine => &self.bus_line,
        }
    }

    pub fn set(&mut self, column: Column, value: String) {
        match column {
            Column::Name => self.name = value,
            Column::BadgeId => self.badge_id = value,
            Column::Neighborhood => self.neighborhood = value,
            Column::BusLine => self.bus_line = value,
        }
    }

    /// Field values in canonical column order.
    pub fn fields(&self) -> [&str; 4] {
        CANONICAL_COLUMNS.map(|column| self.get(column))
    }

    /// The stored value run through the column's normalizer. Rows loaded
    /// from disk may predate normalization.
    pub fn normalized(&self, column: Column) -> String {
        column.normalize(self.get(column))
    }
}

/// Raw, unvalidated values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeInput {
    pub name: String,
    pub badge_id: String,
    pub neighborhood: String,
    pub bus_line: String,
}

impl EmployeeInput {
    pub fn missing_fields(&self) -> Vec<Column> {
        let values = [
            &self.name,
            &self.badge_id,
            &self.neighborhood,
            &self.bus_line,
        ];
        CANONICAL_COLUMNS
            .into_iter()
            .zip(values)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(column, _)| column)
            .collect()
    }

    pub fn normalized(&self) -> Employee {
        Employee {
            name: Column::Name.normalize(&self.name),
            badge_id: Column::BadgeId.normalize(&self.badge_id),
            neighborhood: Column::Neighborhood.normalize(&self.neighborhood),
            bus_line: Column::BusLine.normalize(&self.bus_line),
        }
    }

    pub fn validate(&self) -> Result<Employee, CoreError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CoreError::MissingFields(missing));
        }
        Ok(self.normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::{Column, EmployeeInput};
    use crate::error::CoreError;

    fn input(name: &str, badge: &str, neighborhood: &str, bus: &str) -> EmployeeInput {
        EmployeeInput {
            name: name.to_string(),
            badge_id: badge.to_string(),
            neighborhood: neighborhood.to_string(),
            bus_line: bus.to_string(),
        }
    }

    #[test]
    fn validate_normalizes_every_field() {
        let employee = input("joão silva", "0098", " centro ", "b12")
            .validate()
            .expect("valid input");
        assert_eq!(employee.name, "João Silva");
        assert_eq!(employee.badge_id, "0098");
        assert_eq!(employee.neighborhood, "CENTRO");
        assert_eq!(employee.bus_line, "B12");
    }

    #[test]
    fn validate_reports_blank_fields_in_column_order() {
        let err = input("Ada", "   ", "", "b1").validate().unwrap_err();
        assert_eq!(
            err,
            CoreError::MissingFields(vec![Column::BadgeId, Column::Neighborhood])
        );
        assert_eq!(
            err.to_string(),
            "missing required fields: badge id, neighborhood"
        );
    }

    #[test]
    fn from_header_ignores_bom_and_padding() {
        assert_eq!(Column::from_header("\u{feff}Nome"), Some(Column::Name));
        assert_eq!(Column::from_header(" Ônibus "), Some(Column::BusLine));
        assert_eq!(Column::from_header("Setor"), None);
    }

    #[test]
    fn badge_id_is_trimmed_only() {
        assert_eq!(Column::BadgeId.normalize(" ab01 "), "ab01");
    }
}
