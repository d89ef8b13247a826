use crate::commands::{print_json, print_notices, Context, FilterArgs};
use crate::error::rejected;
use crate::util::employee_table;
use anyhow::{Context as _, Result};
use clap::Args;
use roster_core::{Employee, EmployeeInput, Notice};
use roster_store::handlers::{self, Submission};
use serde::Serialize;
use tracing::info;

/// Missing flags are submitted as empty fields and rejected by validation.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub badge: String,
    #[arg(long, default_value = "")]
    pub neighborhood: String,
    #[arg(long, default_value = "")]
    pub bus: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Debug, Serialize)]
struct SubmissionDto {
    accepted: bool,
    notice: Notice,
    employee: Option<Employee>,
}

pub fn add_employee(ctx: &mut Context<'_>, args: AddArgs) -> Result<()> {
    let input = EmployeeInput {
        name: args.name,
        badge_id: args.badge,
        neighborhood: args.neighborhood,
        bus_line: args.bus,
    };
    let submission = handlers::submit(ctx.store, &input)
        .with_context(|| format!("save employee to {}", ctx.store.path().display()))?;
    let notice = submission.notice();

    if ctx.json {
        let employee = match &submission {
            Submission::Accepted(employee) => Some(employee.clone()),
            Submission::Rejected(_) => None,
        };
        print_json(&SubmissionDto {
            accepted: submission.is_accepted(),
            notice: notice.clone(),
            employee,
        })?;
    } else {
        print_notices(std::slice::from_ref(&notice));
    }

    match submission {
        Submission::Accepted(employee) => {
            info!(badge = %employee.badge_id, rows = ctx.store.table().len(), "employee registered");
            Ok(())
        }
        Submission::Rejected(_) => Err(rejected()),
    }
}

pub fn list_employees(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let view = handlers::apply_filter(ctx.store, args.filter.to_filter());
    let employees = view.employees.into_rows();

    if ctx.json {
        print_json(&employees)?;
        return Ok(());
    }

    if employees.is_empty() {
        println!("no employees");
        return Ok(());
    }

    print!("{}", employee_table(&employees));
    Ok(())
}
