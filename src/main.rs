mod app;
mod config;
mod error;
mod models;
mod render;
mod utils;

use chrono::Local;
use error::Result;
use log::{debug, error};
use models::IconReport;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

const COMPLETION_MESSAGE: &str = "Icons created successfully!";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:<5} {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    let outcome = app::run(Path::new("."));
    ExitCode::from(report_outcome(&outcome, &mut io::stdout(), &mut io::stderr()))
}

/// Prints the completion line on success, or the error on stderr.
/// Returns the process exit status.
fn report_outcome(
    outcome: &Result<Vec<IconReport>>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8 {
    match outcome {
        Ok(reports) => {
            for report in reports {
                debug!("{}: {}px, {} bytes", report.file_name, report.size, report.bytes);
            }
            let _ = writeln!(out, "{}", COMPLETION_MESSAGE);
            0
        }
        Err(e) => {
            error!("{}", e);
            // Still visible when logging is filtered off
            let _ = writeln!(err, "Error: {}", e);
            1
        }
    }
}
