//! Deserialize Command
//!
//! Applies a JSON object to a form document and emits the updated form.

use super::{FilterArgs, load_form, load_json, write_or_print};
use miette::IntoDiagnostic;
use serde::Serialize;
use starbase::AppResult;
use std::path::PathBuf;
use syphon_core::host::Element;
use syphon_core::{DeserializeSummary, deserialize};

/// JSON output for deserialize command
#[derive(Serialize)]
struct DeserializeResult {
    success: bool,
    form: String,
    data: String,
    applied: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unresolved: Vec<String>,
    /// Updated form, unless it was written to `--output`
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DeserializeResult {
    fn success(
        form: &str,
        data: &str,
        summary: DeserializeSummary,
        result: Option<Element>,
    ) -> Self {
        Self {
            success: true,
            form: form.to_string(),
            data: data.to_string(),
            applied: summary.applied,
            unresolved: summary.unresolved,
            result,
            error: None,
        }
    }

    fn error(form: &str, data: &str, error: &str) -> Self {
        Self {
            success: false,
            form: form.to_string(),
            data: data.to_string(),
            applied: 0,
            unresolved: Vec::new(),
            result: None,
            error: Some(error.to_string()),
        }
    }
}

/// Run the deserialize command
///
/// # Arguments
/// * `form` - Path to the form document (JSON element tree)
/// * `data` - Path to the JSON object to apply
/// * `filters` - Name filters, selectors and key options
/// * `output` - Optional file to write the updated form to
/// * `json` - Output a result envelope as JSON
pub fn run_deserialize(
    form: PathBuf,
    data: PathBuf,
    filters: &FilterArgs,
    output: Option<PathBuf>,
    json: bool,
) -> AppResult {
    let form_str = form.display().to_string();
    let data_str = data.display().to_string();

    let loaded = filters.options().and_then(|options| {
        let root = load_form(&form)?;
        let value = load_json(&data)?;
        Ok((options, root, value))
    });
    let (options, mut root, value) = match loaded {
        Ok(loaded) => loaded,
        Err(e) if json => {
            let result = DeserializeResult::error(&form_str, &data_str, &e.to_string());
            println!(
                "{}",
                serde_json::to_string_pretty(&result).into_diagnostic()?
            );
            return Ok(Some(1));
        }
        Err(e) => return Err(e),
    };

    if !value.is_object() {
        let msg = format!("Data in {:?} must be a JSON object", data);
        if json {
            let result = DeserializeResult::error(&form_str, &data_str, &msg);
            println!(
                "{}",
                serde_json::to_string_pretty(&result).into_diagnostic()?
            );
        } else {
            eprintln!("{}", msg);
        }
        return Ok(Some(1));
    }

    let summary = deserialize(&mut root, &value, &options);
    if !json {
        eprintln!("Applied {} value(s) to {:?}", summary.applied, form);
        for name in &summary.unresolved {
            eprintln!("  no value for '{}'", name);
        }
    }

    if json {
        // Only embed the form in the envelope when it is not written to a file
        let embedded = match &output {
            Some(_) => {
                let content = serde_json::to_string_pretty(&root).into_diagnostic()?;
                write_or_print(output.as_deref(), &content)?;
                None
            }
            None => Some(root),
        };
        let result = DeserializeResult::success(&form_str, &data_str, summary, embedded);
        println!(
            "{}",
            serde_json::to_string_pretty(&result).into_diagnostic()?
        );
    } else {
        let content = serde_json::to_string_pretty(&root).into_diagnostic()?;
        write_or_print(output.as_deref(), &content)?;
    }

    Ok(None)
}
