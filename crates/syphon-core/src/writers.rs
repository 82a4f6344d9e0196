//! Built-in value writers (control, value → control state).

use crate::control::Control;
use crate::registry::TypeRegistry;
use crate::value::{contains_display, display_string, truthy};
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

/// Writes a value into a control. `None` is the absent-marker: nothing was resolved.
pub type WriteFn = Arc<dyn Fn(&mut dyn Control, Option<&Value>) + Send + Sync>;

/// Wrap a closure as a [`WriteFn`].
pub fn writer<F>(f: F) -> WriteFn
where
    F: Fn(&mut dyn Control, Option<&Value>) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Writer registry for a single deserialize call.
pub struct InputWriters {
    registry: TypeRegistry<WriteFn>,
}

impl InputWriters {
    /// Built-in writers with `overrides` applied on top.
    pub fn new(overrides: &IndexMap<String, WriteFn>) -> Self {
        let mut registry = TypeRegistry::new(writer(|control, value| {
            if let Some(value) = value {
                control.set_value(value);
            }
        }));
        registry.register("checkbox", writer(write_checkbox));
        registry.register("radio", writer(write_radio));
        registry.register_all(overrides);
        Self { registry }
    }

    /// Write `value` into `control` through the handler registered for its type.
    pub fn write(&self, control: &mut dyn Control, value: Option<&Value>) {
        let handler = self.registry.dispatch(&control.control_type());
        handler(control, value);
    }

    pub fn registry(&self) -> &TypeRegistry<WriteFn> {
        &self.registry
    }
}

impl Default for InputWriters {
    fn default() -> Self {
        Self::new(&IndexMap::new())
    }
}

/// Arrays check the box only when its own value is a member. This is the
/// built-in behaviour for `name[]` groups, not just something an override can add.
fn write_checkbox(control: &mut dyn Control, value: Option<&Value>) {
    match value {
        None => {}
        Some(Value::Null) => control.set_indeterminate(true),
        Some(Value::Bool(checked)) => control.set_checked(*checked),
        Some(Value::Array(items)) => {
            let own = display_string(&control.value());
            control.set_checked(contains_display(items, &own));
        }
        Some(other) => control.set_checked(truthy(other)),
    }
}

fn write_radio(control: &mut dyn Control, value: Option<&Value>) {
    if let Some(value) = value {
        let own = display_string(&control.value());
        control.set_checked(own == display_string(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::Element;
    use serde_json::json;

    #[test]
    fn test_default_writer_assigns_value() {
        let writers = InputWriters::default();
        let mut input = Element::input("text").with_name("foo");
        writers.write(&mut input, Some(&json!("bar")));
        assert_eq!(input.value(), json!("bar"));
    }

    #[test]
    fn test_default_writer_ignores_absent() {
        let writers = InputWriters::default();
        let mut input = Element::input("text").with_name("foo").with_value("keep");
        writers.write(&mut input, None);
        assert_eq!(input.value(), json!("keep"));
    }

    #[test]
    fn test_checkbox_writer() {
        let writers = InputWriters::default();
        let mut chk = Element::input("checkbox").with_name("chk");

        writers.write(&mut chk, Some(&json!(true)));
        assert!(chk.checked());

        writers.write(&mut chk, Some(&json!(false)));
        assert!(!chk.checked());

        writers.write(&mut chk, Some(&Value::Null));
        assert!(chk.is_indeterminate());
        assert!(!chk.checked());
    }

    #[test]
    fn test_checkbox_writer_checks_array_membership() {
        let writers = InputWriters::default();
        let mut baz = Element::input("checkbox").with_name("foo[]").with_value("baz");
        let mut biz = Element::input("checkbox").with_name("foo[]").with_value("biz").with_checked();
        let data = json!(["baz", "qux"]);

        writers.write(&mut baz, Some(&data));
        writers.write(&mut biz, Some(&data));
        assert!(baz.checked());
        assert!(!biz.checked());
    }

    #[test]
    fn test_radio_writer_compares_display_strings() {
        let writers = InputWriters::default();
        let mut one = Element::input("radio").with_name("foo").with_value("1").with_checked();
        let mut two = Element::input("radio").with_name("foo").with_value("2");

        writers.write(&mut one, Some(&json!(2)));
        writers.write(&mut two, Some(&json!(2)));
        assert!(!one.checked());
        assert!(two.checked());
    }

    #[test]
    fn test_radio_writer_ignores_absent() {
        let writers = InputWriters::default();
        let mut radio = Element::input("radio").with_name("foo").with_value("1").with_checked();
        writers.write(&mut radio, None);
        assert!(radio.checked());
    }

    #[test]
    fn test_writer_override() {
        let mut overrides = IndexMap::new();
        overrides.insert(
            "text".to_string(),
            writer(|control, value| {
                if let Some(value) = value {
                    control.set_value(&json!(display_string(value).to_uppercase()));
                }
            }),
        );
        let writers = InputWriters::new(&overrides);
        let mut input = Element::input("text").with_name("foo");
        writers.write(&mut input, Some(&json!("bar")));
        assert_eq!(input.value(), json!("BAR"));
    }
}
