use crate::commands::{print_json, Context};
use crate::util::count_table;
use anyhow::Result;
use clap::Args;
use roster_core::{Column, Summary};
use roster_store::handlers;

#[derive(Debug, Args)]
pub struct StatsArgs {}

pub fn show_stats(ctx: &Context<'_>, _args: StatsArgs) -> Result<()> {
    let summary = handlers::summary(ctx.store);

    if ctx.json {
        print_json(&summary)?;
        return Ok(());
    }

    print_summary(&summary);
    Ok(())
}

pub fn print_summary(summary: &Summary) {
    println!("employees by neighborhood:");
    print!("{}", count_table(Column::Neighborhood, &summary.by_neighborhood));
    println!();
    println!("employees by bus line:");
    print!("{}", count_table(Column::BusLine, &summary.by_bus_line));
}
