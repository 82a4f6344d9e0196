//! Nested object → controls.

use crate::control::FormRoot;
use crate::options::Options;
use crate::resolver::KeyPathResolver;
use crate::writers::InputWriters;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

/// What a deserialize call did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeserializeSummary {
    /// Controls that received a resolved value.
    pub applied: usize,
    /// Names of eligible controls whose path resolved to nothing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

/// Write values from `data` into every eligible control under `root`.
///
/// Controls whose path is missing from `data` still see their writer, called
/// with `None`; the built-in writers leave such controls untouched.
pub fn deserialize<R>(root: &mut R, data: &Value, options: &Options) -> DeserializeSummary
where
    R: FormRoot + ?Sized,
{
    let writers = InputWriters::new(&options.input_writers);
    let resolver = KeyPathResolver::new(data, options.key_joiner.as_ref());
    let mut summary = DeserializeSummary::default();

    for control in root.controls_mut() {
        let Some(name) = options.eligible_name(&*control).map(str::to_string) else {
            continue;
        };
        let Some(path) = options.parse_key(&name) else {
            trace!("Skipping '{}': name has no key segments", name);
            continue;
        };

        let value = resolver.resolve(&path);
        match value {
            Some(value) => {
                trace!("Writing '{}' <- {}", path, value);
                summary.applied += 1;
            }
            None => {
                trace!("No value for '{}'", path);
                summary.unresolved.push(name);
            }
        }
        writers.write(control, value);
    }

    debug!(
        "Deserialized into {} controls ({} unresolved)",
        summary.applied,
        summary.unresolved.len()
    );
    summary
}
