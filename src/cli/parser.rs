use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for sched2ics
/// CLI application to turn schedule spreadsheets into calendar files
#[derive(Parser)]
#[command(
    name = "sched2ics",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert spreadsheet/CSV schedule exports into iCalendar (.ics) files",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the time zone for this run (IANA name, e.g. Europe/Rome)
    #[arg(global = true, long = "tz", value_name = "ZONE")]
    pub tz: Option<String>,

    /// Override the number of leading rows skipped before the header
    #[arg(global = true, long = "skip-rows", value_name = "N")]
    pub skip_rows: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert one or more schedule files into calendar files
    Convert {
        /// Input files (.csv, .xlsx, .xls, .ods)
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,

        /// Output file (only with a single input; default: input with new extension)
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "ics")]
        format: ExportFormat,

        /// Overwrite existing output files without asking
        #[arg(long, short = 'f')]
        force: bool,

        /// List every skipped row with its reason
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// Show how rows are reshaped and normalized, without writing anything
    Preview {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Show at most N rows
        #[arg(long, short = 'n', value_name = "N")]
        limit: Option<usize>,

        /// Also print the raw header with its column letters
        #[arg(long = "columns")]
        columns: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(long = "force", help = "Overwrite an existing file with --init")]
        force: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
