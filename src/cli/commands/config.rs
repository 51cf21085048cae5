use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{missing_keys, run_config_migrations};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        // ---- INIT ----
        if *init {
            if path.exists() && !*force {
                return Err(AppError::OutputExists(format!(
                    "{} (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save(path)?;
            success(format!("Config file: {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}, defaults are in use.",
                    path.display()
                ));
            } else {
                if let Err(e) = Config::load(Some(path)) {
                    warning(format!("Configuration is not valid: {e}"));
                }
                let missing = missing_keys(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields (defaults in use): {}",
                        missing.join(", ")
                    ));
                    info("Run `sched2ics config --migrate` to add them.");
                }
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            run_config_migrations(path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.clone())?;
        }
    }

    Ok(())
}

fn edit(path: &Path, requested_editor: Option<String>) -> AppResult<()> {
    if !path.exists() {
        Config::default().save(path)?;
    }

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
            return Ok(());
        }
        _ => warning(format!(
            "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
        )),
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using fallback '{default_editor}'"
            ));
            Ok(())
        }
        _ => Err(AppError::Config(format!(
            "failed to edit configuration file using fallback '{default_editor}'"
        ))),
    }
}
