pub mod codec;
pub mod error;
pub mod handlers;
pub mod load;
pub mod paths;
pub mod persist;

use crate::error::Result;
use crate::load::{load_table, LoadWarning};
use roster_core::{Employee, EmployeeTable, Notice};
use std::path::{Path, PathBuf};

/// Application state: the backing file plus a cached copy of its table.
/// The cache is reloaded from disk after every write.
pub struct Store {
    path: PathBuf,
    table: EmployeeTable,
    load_warning: Option<LoadWarning>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let mut store = Self {
            path: path.to_path_buf(),
            table: EmployeeTable::new(),
            load_warning: None,
        };
        store.reload()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn table(&self) -> &EmployeeTable {
        &self.table
    }

    pub fn load_warning(&self) -> Option<&LoadWarning> {
        self.load_warning.as_ref()
    }

    /// Warnings raised while loading, ready to show to the user.
    pub fn notices(&self) -> Vec<Notice> {
        self.load_warning
            .iter()
            .map(|warning| Notice::warning(warning.to_string()))
            .collect()
    }

    pub fn reload(&mut self) -> Result<()> {
        let loaded = load_table(&self.path)?;
        self.table = loaded.table;
        self.load_warning = loaded.warning;
        Ok(())
    }

    /// Appends a row, rewrites the file, then re-reads it. The cached table
    /// is left untouched if the write fails.
    pub fn append(&mut self, employee: Employee) -> Result<()> {
        let mut next = self.table.clone();
        next.push(employee);
        persist::save_table(&self.path, &next)?;
        self.reload()
    }
}
