//! Built-in value readers (control → value).

use crate::control::Control;
use crate::registry::TypeRegistry;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

/// Reads a value out of a control. `None` means the control contributes nothing.
pub type ReadFn = Arc<dyn Fn(&dyn Control) -> Option<Value> + Send + Sync>;

/// Wrap a closure as a [`ReadFn`].
pub fn reader<F>(f: F) -> ReadFn
where
    F: Fn(&dyn Control) -> Option<Value> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Reader registry for a single serialize call.
pub struct InputReaders {
    registry: TypeRegistry<ReadFn>,
}

impl InputReaders {
    /// Built-in readers with `overrides` applied on top.
    pub fn new(overrides: &IndexMap<String, ReadFn>) -> Self {
        let mut registry = TypeRegistry::new(reader(|control| Some(control.value())));
        registry.register("checkbox", reader(|control| Some(Value::Bool(control.checked()))));
        registry.register(
            "radio",
            reader(|control| control.checked().then(|| control.value())),
        );
        registry.register_all(overrides);
        Self { registry }
    }

    /// Read `control` through the handler registered for its type.
    pub fn read(&self, control: &dyn Control) -> Option<Value> {
        let handler = self.registry.dispatch(&control.control_type());
        handler(control)
    }

    pub fn registry(&self) -> &TypeRegistry<ReadFn> {
        &self.registry
    }
}

impl Default for InputReaders {
    fn default() -> Self {
        Self::new(&IndexMap::new())
    }
}
