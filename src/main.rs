use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use excel_diff::diff;
use excel_diff::excel;
use excel_diff::report::{self, ReportFormat};
use excel_diff::utils::default_output_path;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate a diff report comparing two Excel workbooks",
    long_about = None,
    after_help = "Output is an HTML file viewable in any browser, or JSON with --format json"
)]
struct Cli {
    /// The first (old) Excel workbook
    #[arg(required = true)]
    old_file: PathBuf,

    /// The second (new) Excel workbook
    #[arg(required = true)]
    new_file: PathBuf,

    /// Output filename (default: <new_file>_diff.html next to the new workbook)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Report format: 'html' or 'json'
    #[arg(long, short = 'f', default_value = "html")]
    format: String,

    /// Only print errors
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Exit with status 1 when the workbooks differ
    #[arg(long)]
    exit_code: bool,
}

fn run(cli: Cli) -> Result<bool> {
    let format = match ReportFormat::from_str(&cli.format) {
        Ok(format) => format,
        Err(_) => anyhow::bail!("Invalid report format: {}", cli.format),
    };

    for path in [&cli.old_file, &cli.new_file] {
        if !path.exists() {
            anyhow::bail!("File '{}' not found", path.display());
        }
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.new_file, format.extension()));

    if !cli.quiet {
        println!("\nLoading workbooks...");
        println!("  Old: {}", cli.old_file.display());
        println!("  New: {}", cli.new_file.display());
    }

    let old_workbook = excel::open_workbook(&cli.old_file)?;
    let new_workbook = excel::open_workbook(&cli.new_file)?;
    log::info!(
        "Loaded {} sheet(s) from {} and {} sheet(s) from {}",
        old_workbook.len(),
        old_workbook.path().display(),
        new_workbook.len(),
        new_workbook.path().display()
    );

    let workbook_diff = diff::compare_workbooks(old_workbook.sheets(), new_workbook.sheets());

    if !cli.quiet {
        println!("\nComparing {} sheet(s)...", workbook_diff.len());
        for sheet in &workbook_diff.sheets {
            println!("  {}: {}", sheet.name, sheet.status_label());
        }
    }

    let stats = workbook_diff.stats();
    log::info!(
        "{} added, {} deleted, {} modified cell(s)",
        stats.added,
        stats.deleted,
        stats.modified
    );

    if !cli.quiet {
        println!("\nGenerating report: {}", output.display());
    }

    report::write_report(
        &workbook_diff,
        format,
        &output,
        &old_workbook.path().display().to_string(),
        &new_workbook.path().display().to_string(),
    )?;

    if !cli.quiet {
        println!("Done!");
    }

    Ok(workbook_diff.has_differences())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let exit_on_difference = cli.exit_code;

    match run(cli) {
        Ok(true) if exit_on_difference => ExitCode::from(1),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Excel-diff error: {:#}", err);
            ExitCode::from(2)
        }
    }
}
