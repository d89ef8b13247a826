use crate::domain::Column;
use crate::table::EmployeeTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub by_neighborhood: Vec<CategoryCount>,
    pub by_bus_line: Vec<CategoryCount>,
}

/// Rows per normalized value of `column`, most frequent first. Ties are
/// ordered by category. Blank values are counted under `""`.
pub fn count_by(table: &EmployeeTable, column: Column) -> Vec<CategoryCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for employee in table {
        *counts.entry(employee.normalized(column)).or_default() += 1;
    }
    let mut items: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    items.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    items
}

pub fn summarize(table: &EmployeeTable) -> Summary {
    Summary {
        by_neighborhood: count_by(table, Column::Neighborhood),
        by_bus_line: count_by(table, Column::BusLine),
    }
}
