pub mod employee;
pub mod text;

pub use employee::{Column, Employee, EmployeeInput, CANONICAL_COLUMNS};
pub use text::{normalize_badge_id, normalize_code, normalize_name, title_case};
