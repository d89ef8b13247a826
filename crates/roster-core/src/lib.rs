pub mod domain;
pub mod dto;
pub mod error;
pub mod filter;
pub mod report;
pub mod table;

pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use filter::{filter_options, EmployeeFilter, FilterOptions, Selection, ALL_OPTION};
pub use report::{count_by, summarize, CategoryCount, Summary};
pub use table::EmployeeTable;
