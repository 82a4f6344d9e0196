//! Serialize Command
//!
//! Reads a form document and prints its controls as one nested JSON object.

use super::{FilterArgs, load_form, write_or_print};
use miette::IntoDiagnostic;
use starbase::AppResult;
use std::path::PathBuf;
use tracing::debug;

/// Run the serialize command
///
/// # Arguments
/// * `form` - Path to the form document (JSON element tree)
/// * `filters` - Name filters, selectors and key options
/// * `output` - Optional file to write the object to
pub fn run_serialize(form: PathBuf, filters: &FilterArgs, output: Option<PathBuf>) -> AppResult {
    let options = filters.options()?;
    let root = load_form(&form)?;
    debug!("Serializing {:?} with {:?}", form, options);

    let data = match syphon_core::serialize(&root, &options) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to serialize {:?}: {}", form, e);
            return Ok(Some(1));
        }
    };

    let content = serde_json::to_string_pretty(&data).into_diagnostic()?;
    write_or_print(output.as_deref(), &content)?;
    Ok(None)
}
