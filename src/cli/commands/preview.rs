use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Pipeline;
use crate::core::materialize::materialize_row;
use crate::core::time_range::normalize;
use crate::errors::AppResult;
use crate::table::column::column_letter;
use crate::table::{DATE, TIME, WORK_ACTIVITY};
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

/// Handle the `preview` subcommand: print each reshaped row with its raw and
/// normalized time range and what the materializer makes of it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview {
        input,
        limit,
        columns,
    } = cmd
    {
        let pipeline = Pipeline::new(cfg)?;

        if *columns {
            let raw = pipeline.raw_table(input)?;
            header(format!("Columns of {}", input.display()));
            for (i, label) in raw.headers.iter().enumerate() {
                let dropped = cfg
                    .drop_columns
                    .iter()
                    .any(|l| l.trim().eq_ignore_ascii_case(&column_letter(i)));
                let mark = if dropped { " (dropped)" } else { "" };
                println!("  {:>3}  {label}{mark}", column_letter(i));
            }
            println!();
        }

        let table = pipeline.reshaped_table(input)?;
        header(format!("Preview of {}", input.display()));

        let mut out = Table::new(vec![
            Column::new("Line", 6),
            Column::new("Date", 12),
            Column::new("Time", 22),
            Column::new("Normalized", 22),
            Column::new("Name", 32),
            Column::new("Result", 40),
        ]);
        let mut ok_flags = Vec::new();

        let shown = limit.unwrap_or(table.rows.len());
        for row in table.rows.iter().take(shown) {
            let time = table.cell(row, TIME).unwrap_or("");
            let result = match materialize_row(&table, row, pipeline.materialize_config()) {
                Ok(ev) => {
                    ok_flags.push(true);
                    format!("{} → {}", ev.start_str(), ev.end.format("%H:%M"))
                }
                Err(reason) => {
                    ok_flags.push(false);
                    format!("skipped: {reason}")
                }
            };

            out.add_row(vec![
                row.line.to_string(),
                table.cell(row, DATE).unwrap_or("").to_string(),
                time.to_string(),
                normalize(time).rendered,
                table.cell(row, WORK_ACTIVITY).unwrap_or("").to_string(),
                result,
            ]);
        }

        let lines = out.render_lines();
        for (i, line) in lines.iter().enumerate() {
            // first two lines are the header and the separator
            match i.checked_sub(2).and_then(|r| ok_flags.get(r)) {
                Some(true) => println!("{}", Colour::Green.paint(line.as_str())),
                Some(false) => println!("{}", Colour::Red.paint(line.as_str())),
                None => println!("{line}"),
            }
        }

        let good = ok_flags.iter().filter(|ok| **ok).count();
        info(format!(
            "{} of {} row(s) shown, {good} would become events ({})",
            ok_flags.len(),
            table.rows.len(),
            pipeline.time_zone().name()
        ));
    }
    Ok(())
}
