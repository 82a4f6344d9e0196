//! In-memory element tree implementing the host traits.
//!
//! Models just enough of an HTML form for the engine: tags, attributes, select
//! options and the live value/checked state. Trees round-trip through serde, so
//! forms can be kept as JSON fixtures.

use super::selector::Selector;
use crate::control::{Control, FormRoot};
use crate::value::{contains_display, display_string};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

const CONTROL_TAGS: [&str; 4] = ["input", "select", "textarea", "button"];

fn is_false(b: &bool) -> bool {
    !*b
}

/// An `<option>` of a select element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub selected: bool,
}

/// A node of the in-memory document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, String>,
    /// Text content (used by textareas)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Live value; falls back to the `value` attribute when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub indeterminate: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    /// `<input type="...">`
    pub fn input(input_type: &str) -> Self {
        Self::new("input").with_attr("type", input_type)
    }

    pub fn textarea() -> Self {
        Self::new("textarea")
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    /// `<button>` without a type attribute, which makes it a submit button.
    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_attr("name", name)
    }

    /// Set the `value` attribute.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.with_attr("value", value)
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_checked(mut self) -> Self {
        self.checked = true;
        self
    }

    pub fn with_multiple(self) -> Self {
        self.with_attr("multiple", "")
    }

    pub fn with_option(mut self, value: impl Into<String>, selected: bool) -> Self {
        self.options.push(SelectOption {
            value: value.into(),
            selected,
        });
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn is_control(&self) -> bool {
        CONTROL_TAGS
            .iter()
            .any(|tag| self.tag.eq_ignore_ascii_case(tag))
    }

    pub fn is_indeterminate(&self) -> bool {
        self.indeterminate
    }

    /// Selected option values, in option order.
    pub fn selected_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.value.as_str())
            .collect()
    }

    /// First element in document order (this one included) matching `selector`.
    pub fn find(&self, selector: &str) -> Option<&Element> {
        let selector = Selector::parse(selector)?;
        self.find_by(&selector)
    }

    pub fn find_mut(&mut self, selector: &str) -> Option<&mut Element> {
        let selector = Selector::parse(selector)?;
        self.find_by_mut(&selector)
    }

    /// All elements in document order matching `selector`.
    pub fn find_all(&self, selector: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        if let Some(selector) = Selector::parse(selector) {
            self.collect_matching(&selector, &mut found);
        }
        found
    }

    fn find_by(&self, selector: &Selector) -> Option<&Element> {
        if selector.matches(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by(selector))
    }

    fn find_by_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        if selector.matches(self) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_mut(selector))
    }

    fn collect_matching<'a>(&'a self, selector: &Selector, found: &mut Vec<&'a Element>) {
        if selector.matches(self) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_matching(selector, found);
        }
    }

    fn collect_controls<'a>(&'a self, out: &mut Vec<&'a dyn Control>) {
        if self.is_control() {
            out.push(self);
            return;
        }
        for child in &self.children {
            child.collect_controls(out);
        }
    }

    fn collect_controls_mut<'a>(&'a mut self, out: &mut Vec<&'a mut dyn Control>) {
        if self.is_control() {
            out.push(self);
            return;
        }
        for child in &mut self.children {
            child.collect_controls_mut(out);
        }
    }

    fn select_options(&mut self, value: &Value) {
        let multiple = self.attr("multiple").is_some();
        match value {
            Value::Array(items) if multiple => {
                for option in &mut self.options {
                    option.selected = contains_display(items, &option.value);
                }
            }
            other => {
                let wanted = display_string(other);
                let mut found = false;
                for option in &mut self.options {
                    option.selected = option.value == wanted && (multiple || !found);
                    found |= option.selected;
                }
            }
        }
    }
}

impl Control for Element {
    fn control_type(&self) -> String {
        let tag = self.tag.to_ascii_lowercase();
        match tag.as_str() {
            "input" => self
                .attr("type")
                .map(str::to_ascii_lowercase)
                .unwrap_or_else(|| "text".to_string()),
            "button" => self
                .attr("type")
                .map(str::to_ascii_lowercase)
                .unwrap_or_else(|| "submit".to_string()),
            "select" if self.attr("multiple").is_some() => "select-multiple".to_string(),
            "select" => "select-one".to_string(),
            _ => tag,
        }
    }

    fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    fn matches(&self, selector: &str) -> bool {
        match Selector::parse(selector) {
            Some(parsed) => parsed.matches(self),
            None => {
                warn!("Unsupported selector '{}', matching nothing", selector);
                false
            }
        }
    }

    fn value(&self) -> Value {
        match self.control_type().as_str() {
            "select-multiple" => Value::Array(
                self.selected_values()
                    .into_iter()
                    .map(|v| Value::String(v.to_string()))
                    .collect(),
            ),
            "select-one" => {
                let selected = self
                    .options
                    .iter()
                    .find(|option| option.selected)
                    .or_else(|| self.options.first());
                Value::String(selected.map(|o| o.value.clone()).unwrap_or_default())
            }
            "textarea" => Value::String(
                self.value
                    .clone()
                    .or_else(|| self.text.clone())
                    .unwrap_or_default(),
            ),
            kind => {
                let fallback = if kind == "checkbox" || kind == "radio" {
                    "on"
                } else {
                    ""
                };
                Value::String(
                    self.value
                        .as_deref()
                        .or_else(|| self.attr("value"))
                        .unwrap_or(fallback)
                        .to_string(),
                )
            }
        }
    }

    fn set_value(&mut self, value: &Value) {
        if self.tag.eq_ignore_ascii_case("select") {
            self.select_options(value);
            return;
        }
        self.value = Some(match value {
            Value::Null => String::new(),
            other => display_string(other),
        });
    }

    fn checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    fn set_indeterminate(&mut self, indeterminate: bool) {
        self.indeterminate = indeterminate;
    }
}

impl FormRoot for Element {
    fn controls(&self) -> Vec<&dyn Control> {
        let mut out = Vec::new();
        self.collect_controls(&mut out);
        out
    }

    fn controls_mut(&mut self) -> Vec<&mut dyn Control> {
        let mut out = Vec::new();
        self.collect_controls_mut(&mut out);
        out
    }
}
