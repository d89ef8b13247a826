use crate::commands::stats::print_summary;
use crate::commands::{print_json, print_notices, Context, FilterArgs};
use crate::util::employee_table;
use anyhow::Result;
use clap::Args;
use roster_store::handlers;

#[derive(Debug, Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

pub fn show_view(ctx: &Context<'_>, args: ViewArgs) -> Result<()> {
    let page = handlers::render_page(ctx.store, args.filter.to_filter(), Vec::new());

    if ctx.json {
        print_json(&page)?;
        return Ok(());
    }

    print_notices(&page.notices);
    println!("neighborhood: {}", page.neighborhood_filter);
    println!("  options: {}", page.options.neighborhoods.join(", "));
    println!("bus line: {}", page.bus_line_filter);
    println!("  options: {}", page.options.bus_lines.join(", "));
    println!();
    if page.employees.is_empty() {
        println!("no employees");
    } else {
        print!("{}", employee_table(&page.employees));
    }
    println!();
    print_summary(&page.summary);
    Ok(())
}
