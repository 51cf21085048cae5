use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Pipeline;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, output_path_for};
use crate::models::ConversionReport;
use crate::ui::messages::{detail, error, header, info, warning};

/// Handle the `convert` subcommand.
///
/// Each input is converted independently. A file that cannot be read as a
/// table, or whose output cannot be written, is reported and the remaining
/// inputs are still processed. The command fails at the end if any input
/// failed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert {
        inputs,
        output,
        format,
        force,
        verbose,
    } = cmd
    {
        if output.is_some() && inputs.len() > 1 {
            return Err(AppError::Other(
                "--output can only be used with a single input file".into(),
            ));
        }

        let pipeline = Pipeline::new(cfg)?;
        let mut failed = 0;

        for input in inputs {
            header(input.display());

            let report = match pipeline.convert_path(input) {
                Ok(r) => r,
                Err(e) => {
                    error(format!("{}: {e}", input.display()));
                    failed += 1;
                    continue;
                }
            };

            print_report(&report, *verbose);

            let out = output_path_for(input, *format, output.as_deref());
            if let Err(e) = ExportLogic::export(&report.events, *format, &out, cfg, *force) {
                error(format!("{}: {e}", out.display()));
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(AppError::Other(format!(
                "{failed} of {} input file(s) could not be converted",
                inputs.len()
            )));
        }
    }
    Ok(())
}

fn print_report(report: &ConversionReport, verbose: bool) {
    info(format!(
        "{} row(s) with a time, {} event(s), {} skipped",
        report.rows_considered,
        report.events.len(),
        report.skipped.len()
    ));

    if !report.skipped.is_empty() {
        let summary: Vec<String> = report
            .skip_counts()
            .iter()
            .map(|(reason, n)| format!("{reason}: {n}"))
            .collect();
        warning(format!("Skipped rows ({})", summary.join(", ")));

        if verbose {
            for s in &report.skipped {
                detail(format!("line {}: '{}' → {}", s.line, s.time_text, s.reason));
            }
        }
    }

    if report.is_empty() {
        warning("No events could be built; the calendar will be empty.");
    }
}
