//! CLI entry point for the CSV structure audit.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use csv_audit::{AuditError, ReportOptions, build_report, normalize_blanks, read_table};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Structural quality audit for CSV files",
    long_about = "Inspects a CSV file and prints a one-line JSON report of structural\n\
                  quality signals: row/column counts, header anomalies, duplicate\n\
                  headers, missingness ratios, and a bounded row sample.\n\n\
                  EXIT CODES:\n  \
                  0  success\n  \
                  2  usage error\n  \
                  4  the file could not be read or parsed as delimited text\n\n\
                  EXAMPLES:\n  \
                  # Core audit\n  \
                  csv-audit data.csv | jq .missing_cell_ratio\n\n  \
                  # Scored findings with a verdict\n  \
                  csv-audit data.csv --findings | jq .verdict\n\n  \
                  # Mask PII in the emitted sample rows\n  \
                  csv-audit data.csv --mask-pii"
)]
struct Args {
    /// Path to the CSV file to audit
    path: PathBuf,

    /// Append findings, score, and verdict to the report
    #[arg(long)]
    findings: bool,

    /// Mask detected PII (emails, SSNs, card numbers) in the sample rows
    #[arg(long)]
    mask_pii: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout stays reserved for the JSON report. The
/// default level is `warn`, which keeps a successful run silent there.
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    // A missing or malformed argument makes clap print usage to stderr and
    // exit with code 2.
    let args = Args::parse();

    init_logging(&args.log_level);

    match run(&args) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // One diagnostic line on stderr; nothing reaches stdout.
            eprintln!("csv-audit: {e}");
            debug!(code = e.error_code(), "audit failed");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Run the audit pipeline and render the report line.
fn run(args: &Args) -> Result<String, AuditError> {
    info!("auditing {}", args.path.display());

    let mut table = read_table(&args.path)?;
    normalize_blanks(&mut table);

    info!(
        rows = table.height(),
        columns = table.width(),
        "table loaded and normalized"
    );

    let options = ReportOptions {
        findings: args.findings,
        mask_pii: args.mask_pii,
    };
    let report = build_report(&table, options)?;

    report.to_json_line()
}
