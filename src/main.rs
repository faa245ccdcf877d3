use clap::{Parser, Subcommand};
use rosterfmt::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rosterfmt")]
#[command(about = "Reformat roster spreadsheets into quoted name/registration/department strings")]
#[command(long_about = "Rosterfmt - roster spreadsheet reformatter

Extracts the 'Full name', 'Registration No.', and 'Department' columns from
one sheet of an .xlsx workbook and writes a new workbook whose column A holds
one string per source row:

  \"Jane Doe\", \"A123\", \"CS\"

COMMANDS:
  sheets    - List the sheet names of a workbook
  reformat  - Reformat one sheet into the output workbook
  serve     - Run the HTTP API server

EXAMPLES:
  rosterfmt sheets roster.xlsx
  rosterfmt reformat roster.xlsx formatted_output.xlsx
  rosterfmt reformat roster.xlsx out.xlsx --sheet 'Term 2'
  rosterfmt serve --host 0.0.0.0 --port 3000")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sheet names of an .xlsx workbook
    Sheets {
        /// Path to the workbook (.xlsx)
        file: PathBuf,
    },

    #[command(long_about = "Reformat one sheet of an .xlsx workbook.

Header names are matched after trimming surrounding whitespace; the three
required columns are 'Full name', 'Registration No.', and 'Department'.
Every other column is discarded. The output workbook has a single sheet with
the formatted strings in column A and no header row.

SHEET SELECTION:
  --sheet NAME        use the named sheet
  (no --sheet)        single-sheet workbooks use their only sheet;
                      multi-sheet workbooks list the names and exit

EXAMPLE:
  rosterfmt reformat roster.xlsx formatted_output.xlsx --sheet 'Term 2'")]
    /// Reformat one sheet into the output workbook
    Reformat {
        /// Path to the input workbook (.xlsx)
        input: PathBuf,

        /// Output workbook path (.xlsx)
        output: PathBuf,

        /// Sheet to process (defaults to the only sheet)
        #[arg(short, long)]
        sheet: Option<String>,

        /// Show verbose processing steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the HTTP API server
    Serve {
        /// Host address to bind to (use 0.0.0.0 for all interfaces)
        #[arg(short = 'H', long, default_value = "127.0.0.1", env = "ROSTERFMT_HOST")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080", env = "ROSTERFMT_PORT")]
        port: u16,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sheets { file } => cli::sheets(file)?,

        Commands::Reformat {
            input,
            output,
            sheet,
            verbose,
        } => cli::reformat_file(input, output, sheet, verbose)?,

        Commands::Serve { host, port } => cli::serve(host, port)?,
    }

    Ok(())
}
