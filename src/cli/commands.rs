//! CLI command implementations

use crate::api::{run_api_server, server::ApiConfig};
use crate::error::RosterResult;
use crate::excel::{FormattedWriter, SheetReader};
use crate::reformat;
use colored::Colorize;
use std::path::PathBuf;

/// Execute the sheets command: list the workbook's sheet names
pub fn sheets(file: PathBuf) -> RosterResult<()> {
    let reader = SheetReader::new(&file);
    let names = reader.sheet_names()?;

    println!("{}", "📄 Workbook sheets".bold().green());
    println!("   File: {}", file.display());
    println!();
    for (idx, name) in names.iter().enumerate() {
        println!("   {}. {}", idx + 1, name.bright_blue());
    }
    println!();
    println!("   {} sheet(s) found", names.len());
    Ok(())
}

/// Execute the reformat command: read the selected sheet, build the
/// formatted output table, and write the single-column workbook
pub fn reformat_file(
    input: PathBuf,
    output: PathBuf,
    sheet: Option<String>,
    verbose: bool,
) -> RosterResult<()> {
    println!("{}", "📋 Reformatting roster sheet".bold().green());
    println!("   Input: {}", input.display());

    let reader = SheetReader::new(&input);
    let sheet_name = reader.select_sheet(sheet.as_deref())?;
    println!("   Sheet: {}", sheet_name.bright_blue().bold());
    println!();

    if verbose {
        println!("{}", "📖 Reading worksheet...".cyan());
    }
    let source = reader.read_sheet(&sheet_name)?;
    if verbose {
        println!(
            "   Found {} columns, {} data rows",
            source.columns.len(),
            source.row_count()
        );
    }

    let rows = reformat::reformat(&source)?;
    let writer = FormattedWriter::new(rows);

    if verbose {
        println!("{}", "💾 Writing output workbook...".cyan());
    }
    writer.write(&output)?;

    println!("{}", "✅ Reformat complete".bold().green());
    println!(
        "   {} row(s) written to {}",
        writer.row_count(),
        output.display()
    );
    Ok(())
}

/// Execute the serve command: run the HTTP API until shutdown
pub fn serve(host: String, port: u16) -> anyhow::Result<()> {
    let config = ApiConfig { host, port };
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_api_server(config))
}
