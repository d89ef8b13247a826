use crate::codec::encode_table;
use crate::error::Result;
use crate::paths;
use roster_core::EmployeeTable;
use std::fs::File;
use std::path::Path;

/// Truncates and rewrites the whole file. Not atomic.
pub fn save_table(path: &Path, table: &EmployeeTable) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let file = File::create(path)?;
    encode_table(table, file)
}
