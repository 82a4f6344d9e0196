//! Host environment abstraction.
//!
//! The key-path engine never looks inside a control beyond the methods on
//! [`Control`]. Hosts (a DOM binding, a TUI form, the in-memory model in
//! [`crate::host::memory`]) implement these traits to plug in.

use serde_json::Value;

/// Control types that never take part in serialization or deserialization.
pub const BUTTON_TYPES: [&str; 3] = ["button", "submit", "reset"];

/// A single form-field-like element.
pub trait Control {
    /// Lowercase type tag, e.g. `"text"`, `"checkbox"`, `"select-multiple"`.
    fn control_type(&self) -> String;

    /// Raw name attribute, if any.
    fn name(&self) -> Option<&str>;

    /// Test the control against a host selector string.
    fn matches(&self, selector: &str) -> bool;

    /// Current value as displayed by the control.
    ///
    /// Scalar controls report a string; multi-selects report an array.
    fn value(&self) -> Value;

    /// Assign the displayed value.
    fn set_value(&mut self, value: &Value);

    fn checked(&self) -> bool;

    fn set_checked(&mut self, checked: bool);

    fn set_indeterminate(&mut self, indeterminate: bool);

    /// Button-like controls are skipped by the traversal layer.
    fn is_button_like(&self) -> bool {
        BUTTON_TYPES.contains(&self.control_type().as_str())
    }
}

/// Something controls can be enumerated from.
///
/// Both methods yield controls in document order, which is the only ordering
/// the engine relies on. A root that is itself a control yields itself.
pub trait FormRoot {
    fn controls(&self) -> Vec<&dyn Control>;

    fn controls_mut(&mut self) -> Vec<&mut dyn Control>;
}

impl<R: FormRoot> FormRoot for [R] {
    fn controls(&self) -> Vec<&dyn Control> {
        self.iter().flat_map(|root| root.controls()).collect()
    }

    fn controls_mut(&mut self) -> Vec<&mut dyn Control> {
        self.iter_mut().flat_map(|root| root.controls_mut()).collect()
    }
}

impl<R: FormRoot> FormRoot for Vec<R> {
    fn controls(&self) -> Vec<&dyn Control> {
        self.as_slice().controls()
    }

    fn controls_mut(&mut self) -> Vec<&mut dyn Control> {
        self.as_mut_slice().controls_mut()
    }
}
