use anyhow::Result;
use clap::Args;
use roster_config::AppConfig;
use roster_core::{EmployeeFilter, Notice, NoticeLevel, Selection};
use roster_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod employees;
pub mod export;
pub mod filters;
pub mod stats;
pub mod view;

pub struct Context<'a> {
    pub store: &'a mut Store,
    pub json: bool,
    pub config: &'a AppConfig,
}

/// Dropdown selections shared by the commands that show employees.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Neighborhood to keep ("All" keeps every row)
    #[arg(long, value_name = "NEIGHBORHOOD")]
    pub neighborhood: Option<String>,
    /// Bus line to keep ("All" keeps every row)
    #[arg(long, value_name = "BUS")]
    pub bus: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> EmployeeFilter {
        EmployeeFilter::new(
            Selection::from_option(self.neighborhood.as_deref()),
            Selection::from_option(self.bus.as_deref()),
        )
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Successes go to stdout, warnings to stderr.
pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.message),
            NoticeLevel::Warning => eprintln!("warning: {}", notice.message),
        }
    }
}
