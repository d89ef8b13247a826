//! One handler per user action. Each takes the current [`Store`] and returns
//! what the surface should show; only [`submit`] mutates state.

use crate::codec::encode_to_vec;
use crate::error::Result;
use crate::Store;
use roster_core::{
    filter_options, summarize, Column, CoreError, Employee, EmployeeFilter, EmployeeInput,
    EmployeeTable, ExportArtifact, FilterOptions, Notice, PageView, Summary, CSV_MIME_TYPE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(Employee),
    Rejected(Vec<Column>),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }

    pub fn notice(&self) -> Notice {
        match self {
            Submission::Accepted(employee) => {
                Notice::success(format!("registered {} ({})", employee.name, employee.badge_id))
            }
            Submission::Rejected(missing) => Notice::warning(format!(
                "fill in every field before registering; {}",
                CoreError::MissingFields(missing.clone())
            )),
        }
    }
}

/// Incomplete input is rejected without touching the file.
pub fn submit(store: &mut Store, input: &EmployeeInput) -> Result<Submission> {
    match input.validate() {
        Ok(employee) => {
            store.append(employee.clone())?;
            Ok(Submission::Accepted(employee))
        }
        Err(CoreError::MissingFields(missing)) => Ok(Submission::Rejected(missing)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    pub filter: EmployeeFilter,
    pub options: FilterOptions,
    pub employees: EmployeeTable,
}

pub fn apply_filter(store: &Store, filter: EmployeeFilter) -> FilteredView {
    let table = store.table();
    FilteredView {
        options: filter_options(table),
        employees: filter.apply(table),
        filter,
    }
}

/// Counts always cover the full table, whatever the filter.
pub fn summary(store: &Store) -> Summary {
    summarize(store.table())
}

pub fn download(store: &Store, filter: &EmployeeFilter, file_name: &str) -> Result<ExportArtifact> {
    let filtered = filter.apply(store.table());
    Ok(ExportArtifact {
        file_name: file_name.to_string(),
        mime_type: CSV_MIME_TYPE.to_string(),
        bytes: encode_to_vec(&filtered)?,
    })
}

pub fn render_page(store: &Store, filter: EmployeeFilter, notices: Vec<Notice>) -> PageView {
    let mut all_notices = store.notices();
    all_notices.extend(notices);
    let view = apply_filter(store, filter);
    PageView {
        notices: all_notices,
        neighborhood_filter: view.filter.neighborhood.label().to_string(),
        bus_line_filter: view.filter.bus_line.label().to_string(),
        options: view.options,
        employees: view.employees.into_rows(),
        summary: summary(store),
    }
}
