use crate::config::Config;
use crate::config::migrate::{fill_missing_fields, missing_fields};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from the configuration file.
    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} not found, run `rwriteoff init` first",
                path.display()
            )));
        }

        let missing = missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!(
                "Missing fields: {} (run `rwriteoff config --migrate`)",
                missing.join(", ")
            ));
        }
        Ok(())
    }

    pub fn migrate(path: &Path) -> AppResult<bool> {
        fill_missing_fields(path)
    }

    /// Open the file in the requested editor, falling back to $EDITOR/$VISUAL
    /// or the platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{requested}'"));
                return Ok(());
            }
            _ if requested != default_editor => warning(format!(
                "Editor '{requested}' not available, falling back to '{default_editor}'"
            )),
            _ => {}
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{default_editor}'"));
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!(
                "editor '{default_editor}' exited with {s}"
            ))),
            Err(e) => Err(AppError::Config(format!(
                "cannot start editor '{default_editor}': {e}"
            ))),
        }
    }
}
