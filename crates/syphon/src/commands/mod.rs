pub mod deserialize;
pub mod serialize;

pub use deserialize::*;
pub use serialize::*;

use clap::Args;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::{Path, PathBuf};
use syphon_core::host::Element;
use syphon_core::{Options, SyphonConfig, discover_config};
use tracing::{debug, info};

/// Name filtering and key options shared by both commands
#[derive(Clone, Debug, Default, Args)]
pub struct FilterArgs {
    /// Config file (defaults to the nearest syphon.toml / syphon.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Only process controls with this name (repeatable)
    #[arg(long = "include", value_name = "NAME")]
    pub include: Vec<String>,
    /// Skip controls with this name (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,
    /// Skip controls matching this selector (repeatable)
    #[arg(long = "ignore", value_name = "SELECTOR")]
    pub ignore: Vec<String>,
    /// Delimiter for flat names such as `user.email`
    #[arg(short, long)]
    pub delimiter: Option<String>,
}

impl FilterArgs {
    fn as_config(&self) -> SyphonConfig {
        SyphonConfig {
            include: (!self.include.is_empty()).then(|| self.include.clone()),
            exclude: self.exclude.clone(),
            ignored_types: self.ignore.clone(),
            key_delimiter: self.delimiter.clone(),
        }
    }

    /// Resolve the effective options: config file first, flags on top.
    pub fn options(&self) -> Result<Options> {
        let config_path = match &self.config {
            Some(path) => Some(path.clone()),
            None => std::env::current_dir()
                .ok()
                .and_then(|dir| discover_config(&dir)),
        };

        let file_config = match config_path {
            Some(path) => {
                info!("Loading config from {:?}", path);
                SyphonConfig::load(&path)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Failed to load config {:?}", path))?
            }
            None => SyphonConfig::default(),
        };

        if self.delimiter.as_deref() == Some("") {
            return Err(miette::miette!("--delimiter must not be empty"));
        }

        let merged = file_config.merge(self.as_config());
        debug!("Effective config: {:?}", merged);
        Ok(Options::from(merged))
    }
}

/// Load an element tree from a JSON file
pub fn load_form(path: &Path) -> Result<Element> {
    let content = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read form {:?}", path))?;
    serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse form {:?}", path))
}

/// Load any JSON document from a file
pub fn load_json(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {:?}", path))?;
    serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse {:?}", path))
}

/// Write to `output` if given, otherwise print to stdout
pub fn write_or_print(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", content))
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {:?}", path))?;
            info!("Wrote {:?}", path);
        }
        None => println!("{}", content),
    }
    Ok(())
}
