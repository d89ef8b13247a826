use crate::domain::Column;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("missing required fields: {}", list_columns(.0))]
    MissingFields(Vec<Column>),
}

fn list_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|column| column.label())
        .collect::<Vec<_>>()
        .join(", ")
}
