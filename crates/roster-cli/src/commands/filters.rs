use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use roster_core::EmployeeFilter;
use roster_store::handlers;

#[derive(Debug, Args)]
pub struct OptionsArgs {}

pub fn list_options(ctx: &Context<'_>, _args: OptionsArgs) -> Result<()> {
    let view = handlers::apply_filter(ctx.store, EmployeeFilter::default());

    if ctx.json {
        print_json(&view.options)?;
        return Ok(());
    }

    println!("neighborhoods: {}", view.options.neighborhoods.join(", "));
    println!("bus lines: {}", view.options.bus_lines.join(", "));
    Ok(())
}
