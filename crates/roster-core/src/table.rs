use crate::domain::Employee;
use serde::{Deserialize, Serialize};

/// Ordered employee rows. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeTable {
    rows: Vec<Employee>,
}

impl EmployeeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Employee>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, employee: Employee) {
        self.rows.push(employee);
    }

    pub fn rows(&self) -> &[Employee] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Employee> {
        self.rows
    }
}

impl FromIterator<Employee> for EmployeeTable {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EmployeeTable {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
