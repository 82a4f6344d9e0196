//! Controls → nested object.

use crate::assembler::NestedAssembler;
use crate::control::FormRoot;
use crate::error::Result;
use crate::options::Options;
use crate::readers::InputReaders;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Read every eligible control under `root` into one nested object.
///
/// Controls are folded in document order: repeated scalar names resolve
/// last-write-wins and `name[]` controls accumulate into arrays. Fails only on a
/// structural conflict between two names, e.g. `foo` and `foo[bar]`.
///
/// Unchecked checkboxes on a `name[]` path are skipped before their reader's
/// result is used, so even a custom `checkbox` reader cannot add them.
pub fn serialize<R>(root: &R, options: &Options) -> Result<Map<String, Value>>
where
    R: FormRoot + ?Sized,
{
    let readers = InputReaders::new(&options.input_readers);
    let mut assembler = NestedAssembler::new();
    let controls = root.controls();
    let total = controls.len();
    let mut used = 0usize;

    for control in controls {
        let Some(name) = options.eligible_name(control) else {
            continue;
        };
        let Some(path) = options.parse_key(name) else {
            trace!("Skipping '{}': name has no key segments", name);
            continue;
        };

        let Some(mut value) = readers.read(control) else {
            trace!("Skipping '{}': reader produced no value", name);
            continue;
        };

        // `name[]` checkboxes collect the values of the checked boxes
        if path.is_array() && control.control_type() == "checkbox" {
            if !control.checked() {
                trace!("Skipping '{}': unchecked array checkbox", name);
                continue;
            }
            if value.is_boolean() {
                value = control.value();
            }
        }

        trace!("Assigning '{}' -> {}", path, value);
        assembler.insert(&path, value, name)?;
        used += 1;
    }

    debug!(
        "Serialized {} of {} controls into {} top-level keys",
        used,
        total,
        assembler.len()
    );
    Ok(assembler.finish())
}
