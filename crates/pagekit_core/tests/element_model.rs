use pagekit_core::{Element, ElementError, ElementLevel, Icon, PropertyValue, Text};
use serde_json::json;

#[test]
fn class_attribute_concatenates_across_calls() {
    let mut text = Text::new("Due tomorrow");
    text.set_attribute("class", "badge");
    text.add_class("badge-warning");
    text.set_attribute("data-region", "due");

    assert_eq!(text.attributes().value("class"), Some("badge badge-warning"));
    assert_eq!(
        text.attributes_html(),
        " class=\"badge badge-warning\" data-region=\"due\""
    );
}

#[test]
fn merged_attributes_do_not_override_existing_ones() {
    let mut icon = Icon::new("i/warning");
    icon.base_mut().attributes.merge([
        ("alt", Some("Warning")),
        ("class", Some("text-danger")),
        ("aria-hidden", None),
    ]);

    let attrs = icon.attributes();
    assert_eq!(attrs.value("alt"), Some(""));
    assert_eq!(attrs.value("class"), Some("text-danger"));
    assert_eq!(attrs.get("aria-hidden"), Some(&None));
}

#[test]
fn identifiers_are_unique_and_stable() {
    let mut first = Text::new("one");
    let mut second = Text::new("two");

    let first_id = first.require_id();
    let second_id = second.require_id();

    assert_ne!(first_id, second_id);
    assert_eq!(first.require_id(), first_id);
    assert_eq!(second.id(), Some(second_id.as_str()));
}

#[test]
fn properties_must_be_declared_before_set() {
    let mut text = Text::new("Section 1");
    let err = text
        .set("highlighted", PropertyValue::Bool(true))
        .expect_err("undeclared property must fail");
    assert_eq!(err, ElementError::UndeclaredProperty("highlighted".to_string()));

    text.add_property("highlighted", PropertyValue::Bool(false));
    text.set("highlighted", PropertyValue::Bool(true))
        .expect("declared property can be set");
    assert!(text.is("highlighted"));
    assert_eq!(text.get("highlighted"), Some(&PropertyValue::Bool(true)));
}

#[test]
fn undeclared_properties_read_as_absent() {
    let text = Text::new("Section 1");
    assert_eq!(text.get("collapsed"), None);
    assert!(!text.is("collapsed"));
}

#[test]
fn non_scalar_update_keeps_previous_value() {
    let mut text = Text::new("Section 1");
    let err = text
        .base_mut()
        .properties
        .set_json("dimmed", &json!({"level": 2}))
        .expect_err("objects are not scalar");
    assert!(matches!(err, ElementError::NonScalarValue { .. }));
    assert_eq!(text.get("dimmed"), Some(&PropertyValue::Bool(false)));
}

#[test]
fn empty_or_zero_id_is_not_an_identifier() {
    let mut parent = Text::new("Heading");
    for placeholder in ["", "0"] {
        parent.set_attribute("id", placeholder);
        assert_eq!(parent.id(), None);
    }

    let mut child = Icon::new("i/info");
    child.set_parent(&parent);
    assert_eq!(child.parent().and_then(|link| link.id.as_deref()), None);
}

#[test]
fn dynamic_property_values_must_be_scalar() {
    let mut text = Text::new("Section 1");
    let properties = &mut text.base_mut().properties;

    properties
        .add_json("weight", &json!(3))
        .expect("numbers are scalar");
    let err = properties
        .add_json("tags", &json!(["a", "b"]))
        .expect_err("arrays are not scalar");
    assert!(matches!(err, ElementError::NonScalarValue { .. }));
    assert!(err.to_string().contains("only scalar values"));

    assert_eq!(text.get("weight"), Some(&PropertyValue::Int(3)));
    assert!(text.get("tags").is_none());
}

#[test]
fn atoms_report_atom_level() {
    assert_eq!(Text::new("x").level(), ElementLevel::Atom);
    assert_eq!(Icon::new("i/edit").level(), ElementLevel::Atom);
    assert_eq!(Icon::new("i/edit").kind(), "icon");
}
