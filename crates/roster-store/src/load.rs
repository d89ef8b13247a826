use crate::codec::decode_table;
use crate::error::{Result, StoreError};
use roster_core::EmployeeTable;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Loaded {
    pub table: EmployeeTable,
    pub warning: Option<LoadWarning>,
}

/// A data file that exists but could not be decoded. The caller carries on
/// with an empty table.
#[derive(Debug)]
pub struct LoadWarning {
    pub path: PathBuf,
    pub reason: StoreError,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not load {} ({}); starting with an empty table",
            self.path.display(),
            self.reason
        )
    }
}

pub fn load_table(path: &Path) -> Result<Loaded> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Ok(Loaded {
                table: EmployeeTable::new(),
                warning: None,
            })
        }
        Err(err) => return Err(err.into()),
    };

    match decode_table(bytes.as_slice()) {
        Ok(table) => Ok(Loaded {
            table,
            warning: None,
        }),
        Err(reason) => Ok(Loaded {
            table: EmployeeTable::new(),
            warning: Some(LoadWarning {
                path: path.to_path_buf(),
                reason,
            }),
        }),
    }
}
