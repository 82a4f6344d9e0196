//! Serialize behaviour over the in-memory host.

use rstest::rstest;
use serde_json::{Value, json};
use syphon_core::host::Element;
use syphon_core::{Control, Error, KeySplitter, Options, serialize};

fn to_value(form: &Element, options: &Options) -> Value {
    Value::Object(serialize(form, options).unwrap())
}

#[test]
fn test_text_inputs_and_textarea() {
    let form = Element::form().with_children([
        Element::input("text").with_name("foo").with_value("bar"),
        Element::textarea().with_name("notes").with_text("some text"),
        Element::input("hidden").with_name("token").with_value("abc"),
    ]);

    assert_eq!(
        to_value(&form, &Options::default()),
        json!({"foo": "bar", "notes": "some text", "token": "abc"})
    );
}

#[test]
fn test_select_reports_selected_option() {
    let form = Element::form().with_child(
        Element::select()
            .with_name("foo")
            .with_option("baz", false)
            .with_option("bar", true),
    );

    assert_eq!(to_value(&form, &Options::default()), json!({"foo": "bar"}));
}

#[test]
fn test_multi_select_reports_array() {
    let form = Element::form().with_child(
        Element::select()
            .with_name("foo")
            .with_multiple()
            .with_option("foo", true)
            .with_option("bar", false)
            .with_option("baz", true),
    );

    assert_eq!(
        to_value(&form, &Options::default()),
        json!({"foo": ["foo", "baz"]})
    );
}

#[test]
fn test_unselected_multi_select_reports_empty_array() {
    let form = Element::form().with_child(
        Element::select()
            .with_name("m")
            .with_multiple()
            .with_option("a", false)
            .with_option("b", false),
    );

    assert_eq!(to_value(&form, &Options::default()), json!({"m": []}));
}

#[test]
fn test_unchecked_array_checkbox_skipped_even_with_custom_reader() {
    let form = Element::form().with_children([
        Element::input("checkbox").with_name("tags[]").with_value("a"),
        Element::input("checkbox")
            .with_name("tags[]")
            .with_value("b")
            .with_checked(),
    ]);
    let options = Options::new().reader("checkbox", |control: &dyn Control| {
        let own = control.value();
        Some(json!(format!("{}:{}", own.as_str().unwrap_or_default(), control.checked())))
    });

    assert_eq!(to_value(&form, &options), json!({"tags": ["b:true"]}));
}

#[rstest]
#[case::checked(true, json!({"chk": true}))]
#[case::unchecked(false, json!({"chk": false}))]
fn test_checkbox_reports_checked_state(#[case] checked: bool, #[case] expected: Value) {
    let mut checkbox = Element::input("checkbox").with_name("chk");
    checkbox.checked = checked;
    let form = Element::form().with_child(checkbox);

    assert_eq!(to_value(&form, &Options::default()), expected);
}

#[rstest]
#[case::input_button(Element::input("button").with_name("btn"))]
#[case::input_submit(Element::input("submit").with_name("submit"))]
#[case::input_reset(Element::input("reset").with_name("reset"))]
#[case::button_element(Element::button().with_name("go"))]
fn test_buttons_are_never_serialized(#[case] button: Element) {
    let form = Element::form().with_children([
        button,
        Element::input("text").with_name("foo").with_value("bar"),
    ]);

    // Even an explicit reader for the button type does not bring it back
    let options = Options::new()
        .reader("submit", |_| Some(json!("clicked")))
        .reader("button", |_| Some(json!("clicked")))
        .reader("reset", |_| Some(json!("clicked")));

    assert_eq!(to_value(&form, &options), json!({"foo": "bar"}));
}

#[test]
fn test_unnamed_controls_are_skipped() {
    let form = Element::form().with_children([
        Element::input("text").with_value("orphan"),
        Element::input("text").with_name("").with_value("empty"),
        Element::input("text").with_name("kept").with_value("yes"),
    ]);

    assert_eq!(to_value(&form, &Options::default()), json!({"kept": "yes"}));
}

#[test]
fn test_radio_group_reports_checked_value() {
    let form = Element::form().with_children([
        Element::input("radio").with_name("foo").with_value("1"),
        Element::input("radio")
            .with_name("foo")
            .with_value("2")
            .with_checked(),
        Element::input("radio").with_name("foo").with_value("3"),
    ]);

    assert_eq!(to_value(&form, &Options::default()), json!({"foo": "2"}));
}

#[test]
fn test_radio_group_with_nothing_checked_is_absent() {
    let form = Element::form().with_children([
        Element::input("radio").with_name("foo").with_value("1"),
        Element::input("radio").with_name("foo").with_value("2"),
    ]);

    assert_eq!(to_value(&form, &Options::default()), json!({}));
}

#[test]
fn test_repeated_scalar_name_is_last_write_wins() {
    let form = Element::form().with_children([
        Element::input("text").with_name("foo").with_value("first"),
        Element::input("text").with_name("foo").with_value("second"),
    ]);

    assert_eq!(to_value(&form, &Options::default()), json!({"foo": "second"}));
}

#[test]
fn test_empty_root_yields_empty_object() {
    let form = Element::form().with_child(Element::div());
    assert_eq!(to_value(&form, &Options::default()), json!({}));
}

#[test]
fn test_several_forms_contribute_in_order() {
    let forms = vec![
        Element::form().with_child(Element::input("text").with_name("foo[]").with_value("a")),
        Element::form().with_child(Element::input("text").with_name("foo[]").with_value("b")),
    ];

    let data = serialize(&forms, &Options::default()).unwrap();
    assert_eq!(Value::Object(data), json!({"foo": ["a", "b"]}));
}

#[test]
fn test_custom_reader_overrides_builtin() {
    let form = Element::form().with_children([
        Element::input("text").with_name("foo").with_value("bar"),
        Element::input("checkbox").with_name("chk").with_checked(),
    ]);
    let options = Options::new()
        .reader("text", |control: &dyn Control| {
            Some(json!(control.value().as_str().unwrap_or_default().to_uppercase()))
        })
        .reader("checkbox", |control: &dyn Control| {
            Some(json!(if control.checked() { "yes" } else { "no" }))
        });

    assert_eq!(to_value(&form, &options), json!({"foo": "BAR", "chk": "yes"}));
}

#[test]
fn test_reader_returning_none_skips_control() {
    let form = Element::form().with_children([
        Element::input("text").with_name("foo").with_value("bar"),
        Element::input("email").with_name("mail").with_value("a@b.c"),
    ]);
    let options = Options::new().reader("email", |_| None);

    assert_eq!(to_value(&form, &options), json!({"foo": "bar"}));
}

#[test]
fn test_custom_key_splitter() {
    let form = Element::form().with_children([
        Element::input("text").with_name("foo.bar").with_value("a"),
        Element::input("text").with_name("foo.baz.quux").with_value("b"),
    ]);
    let options = Options::new().key_splitter(KeySplitter::new(|name| {
        name.split('.').map(str::to_string).collect()
    }));

    assert_eq!(
        to_value(&form, &options),
        json!({"foo": {"bar": "a", "baz": {"quux": "b"}}})
    );
}

#[test]
fn test_structural_conflict_is_an_error() {
    let form = Element::form().with_children([
        Element::input("text").with_name("foo").with_value("scalar"),
        Element::input("text").with_name("foo[bar]").with_value("nested"),
    ]);

    let err = serialize(&form, &Options::default()).unwrap_err();
    match err {
        Error::StructuralConflict { path, name, existing, .. } => {
            assert_eq!(path, "foo");
            assert_eq!(name, "foo[bar]");
            assert_eq!(existing, "foo");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_serialize_leaves_form_untouched() {
    let form = Element::form().with_children([
        Element::input("text").with_name("foo").with_value("bar"),
        Element::input("checkbox").with_name("chk"),
    ]);
    let before = form.clone();

    serialize(&form, &Options::default()).unwrap();
    assert_eq!(form, before);
}
