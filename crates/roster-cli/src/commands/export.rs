use crate::commands::{print_json, Context, FilterArgs};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use roster_store::handlers;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

const STDOUT_MARKER: &str = "-";

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    /// Output file, or "-" for stdout (defaults to the suggested file name)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    output: String,
    file_name: String,
    mime_type: String,
    size_bytes: usize,
}

pub fn export_csv(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let filter = args.filter.to_filter();
    let artifact = handlers::download(ctx.store, &filter, &ctx.config.export.file_name)
        .with_context(|| "serialize filtered employees")?;

    let out = match args.out {
        Some(path) if path.as_os_str().is_empty() => {
            return Err(invalid_input("output path cannot be empty"))
        }
        Some(path) => path,
        None => PathBuf::from(&artifact.file_name),
    };

    if out.as_os_str() == STDOUT_MARKER {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&artifact.bytes)?;
        stdout.flush()?;
        return Ok(());
    }

    fs::write(&out, &artifact.bytes)
        .with_context(|| format!("write export file {}", out.display()))?;

    if ctx.json {
        return print_json(&ExportReport {
            output: out.display().to_string(),
            file_name: artifact.file_name,
            mime_type: artifact.mime_type,
            size_bytes: artifact.bytes.len(),
        });
    }

    println!("Export written to {}", out.display());
    Ok(())
}
