use form_transfer::{
    ControlDescriptor, ElementProvider, PageSnapshot, Role, TransferError, copy,
    provider::snapshot::{ContainerNode, ContainerRef, ControlNode},
    set_value,
};
use serde_json::json;

use crate::common::utils::{checked, order_and_search, text_value};

mod common;

fn scopes(page: &PageSnapshot, from: &str, to: &str) -> (Vec<ContainerRef>, Vec<ContainerRef>) {
    (page.select(from), page.select(to))
}

// =========================================================================
// Kind pairs
// =========================================================================

#[test]
fn text_to_text_copy() {
    let mut page = order_and_search();
    let (from, to) = scopes(&page, "#order", "#search");

    let written = copy(&mut page, &from, &to, "customer", None, false).unwrap();

    assert_eq!(written, 1);
    assert_eq!(text_value(&page, "search", "customer"), "ACME Corp");
}

#[test]
fn checkbox_to_checkbox_copy() {
    let mut page = order_and_search();
    let (from, to) = scopes(&page, "#order", "#search");

    copy(&mut page, &from, &to, "express", None, false).unwrap();

    assert!(checked(&page, "search", "express"));
}

#[test]
fn text_value_one_checks_checkbox() {
    // #order qty is text "1", #search qty is a checkbox
    let mut page = order_and_search();
    let (from, to) = scopes(&page, "#order", "#search");

    copy(&mut page, &from, &to, "qty", None, false).unwrap();

    assert!(checked(&page, "search", "qty"));
}

#[test]
fn unchecked_checkbox_to_text_fails() {
    let mut page = order_and_search();
    let (from, to) = scopes(&page, "#order", "#search");

    let err = copy(&mut page, &from, &to, "agree", None, false).unwrap_err();

    assert!(
        matches!(err, TransferError::UnsupportedTransfer { .. }),
        "got {:?}",
        err
    );
    assert_eq!(text_value(&page, "search", "agree"), "");
}

#[test]
fn select_to_untyped_select_copy() {
    let mut page = order_and_search();
    let (from, to) = scopes(&page, "#order", "#search");

    copy(&mut page, &from, &to, "region", None, false).unwrap();

    assert_eq!(text_value(&page, "search", "region"), "EU");
}

// =========================================================================
// Names
// =========================================================================

#[test]
fn explicit_destination_name() {
    let mut page = order_and_search();
    let (from, to) = scopes(&page, "#order", "#search");

    copy(&mut page, &from, &to, "customer", Some("custName"), false).unwrap();

    assert_eq!(text_value(&page, "search", "custName"), "ACME Corp");
    assert_eq!(text_value(&page, "search", "customer"), "", "same-name field untouched");
}

#[test]
fn omitted_destination_name_equals_source_name() {
    let mut implicit = order_and_search();
    let mut explicit = order_and_search();
    let (from, to) = scopes(&implicit, "#order", "#search");

    for name in ["customer", "qty", "express", "region"] {
        copy(&mut implicit, &from, &to, name, None, false).unwrap();
        copy(&mut explicit, &from, &to, name, Some(name), false).unwrap();
    }

    assert_eq!(implicit, explicit);
}

#[test]
fn copy_within_the_same_container() {
    let mut page = order_and_search();
    let scope = page.select("#order");

    copy(&mut page, &scope, &scope, "qty", Some("agree"), false).unwrap();

    assert!(checked(&page, "order", "agree"));
}

// =========================================================================
// Cardinality
// =========================================================================

#[test]
fn scope_must_be_exactly_one_container() {
    let mut page = order_and_search();
    let one = page.select("#order");
    let none = page.select("#missing");
    let many = page.select(".form");
    assert_eq!(many.len(), 2);

    assert_eq!(
        copy(&mut page, &none, &one, "customer", None, false),
        Err(TransferError::ScopeCardinality { role: Role::Source, found: 0 })
    );
    assert_eq!(
        copy(&mut page, &one, &many, "customer", None, false),
        Err(TransferError::ScopeCardinality { role: Role::Destination, found: 2 })
    );
    assert_eq!(
        set_value(&mut page, &json!("x"), &many, "customer", false),
        Err(TransferError::ScopeCardinality { role: Role::Destination, found: 2 })
    );
}

#[test]
fn scopes_are_checked_before_controls() {
    let mut page = order_and_search();
    let from = page.select("#order");
    let none = page.select("#missing");

    // Source name does not exist either, but the scope error wins
    let err = copy(&mut page, &from, &none, "nope", None, false).unwrap_err();
    assert!(matches!(err, TransferError::ScopeCardinality { role: Role::Destination, .. }));
}

#[test]
fn missing_source_is_a_cardinality_error() {
    let mut page = order_and_search();
    let (from, to) = scopes(&page, "#order", "#search");

    let err = copy(&mut page, &from, &to, "nope", None, false).unwrap_err();

    assert_eq!(
        err,
        TransferError::Cardinality {
            role: Role::Source,
            name: "nope".into(),
            found: 0,
        }
    );
    assert!(err.to_string().contains("source"), "{}", err);
    assert!(err.to_string().contains("nope"), "{}", err);
}

#[test]
fn duplicated_source_is_rejected_even_with_multiple_destinations() {
    let mut page = PageSnapshot::new(vec![
        ContainerNode::new("a")
            .with_control(ControlNode::text("dup", "1"))
            .with_control(ControlNode::text("dup", "2")),
        ContainerNode::new("b").with_control(ControlNode::text("dup", "")),
    ]);
    let (from, to) = scopes(&page, "#a", "#b");

    let err = copy(&mut page, &from, &to, "dup", None, true).unwrap_err();

    assert!(matches!(err, TransferError::Cardinality { role: Role::Source, found: 2, .. }));
}

fn page_with_two_destinations() -> PageSnapshot {
    PageSnapshot::new(vec![
        ContainerNode::new("src").with_control(ControlNode::text("flag", "on")),
        ContainerNode::new("dst")
            .with_control(ControlNode::checkbox("flag", false))
            .with_control(ControlNode::text("flag", "")),
    ])
}

#[test]
fn multiple_destinations_rejected_by_default() {
    let mut page = page_with_two_destinations();
    let (from, to) = scopes(&page, "#src", "#dst");

    let err = copy(&mut page, &from, &to, "flag", None, false).unwrap_err();

    assert_eq!(
        err,
        TransferError::Cardinality {
            role: Role::Destination,
            name: "flag".into(),
            found: 2,
        }
    );
    assert!(!page.containers[1].controls[0].checked, "nothing written");
}

#[test]
fn multiple_destinations_each_receive_their_own_conversion() {
    let mut page = page_with_two_destinations();
    let (from, to) = scopes(&page, "#src", "#dst");

    let written = copy(&mut page, &from, &to, "flag", None, true).unwrap();

    assert_eq!(written, 2);
    assert!(page.containers[1].controls[0].checked, "checkbox coerced from 'on'");
    assert_eq!(page.containers[1].controls[1].value, "on", "text copied verbatim");
}

#[test]
fn multiple_destinations_allow_zero_matches() {
    let mut page = page_with_two_destinations();
    let (from, to) = scopes(&page, "#src", "#dst");

    assert_eq!(copy(&mut page, &from, &to, "flag", Some("absent"), true), Ok(0));
}

#[test]
fn multi_destination_failure_keeps_earlier_writes() {
    let mut page = PageSnapshot::new(vec![
        ContainerNode::new("src").with_control(ControlNode::checkbox("opt", true)),
        ContainerNode::new("dst")
            .with_control(ControlNode::checkbox("opt", false))
            .with_control(ControlNode::text("opt", "old"))
            .with_control(ControlNode::checkbox("opt", false)),
    ]);
    let (from, to) = scopes(&page, "#src", "#dst");

    let err = copy(&mut page, &from, &to, "opt", None, true).unwrap_err();

    assert!(matches!(err, TransferError::UnsupportedTransfer { .. }));
    let dst = &page.containers[1].controls;
    assert!(dst[0].checked, "first destination already written");
    assert_eq!(dst[1].value, "old");
    assert!(!dst[2].checked, "destinations after the failure are not reached");
}

// =========================================================================
// Unsupported kinds
// =========================================================================

#[test]
fn radio_source_is_unsupported() {
    let mut page = order_and_search();
    let (from, to) = scopes(&page, "#order", "#search");

    let err = copy(&mut page, &from, &to, "channel", None, false).unwrap_err();

    assert_eq!(
        err,
        TransferError::UnsupportedKind {
            role: Role::Source,
            name: "channel".into(),
            control_type: "radio".into(),
        }
    );
}

#[test]
fn unsupported_destination_is_rejected_for_any_source_kind() {
    for source in [ControlNode::text("f", "1"), ControlNode::checkbox("f", true)] {
        let mut page = PageSnapshot::new(vec![
            ContainerNode::new("src").with_control(source),
            ContainerNode::new("dst").with_control(ControlNode::new("f", "input", Some("file"))),
        ]);
        let (from, to) = scopes(&page, "#src", "#dst");

        let err = copy(&mut page, &from, &to, "f", None, false).unwrap_err();

        assert!(
            matches!(err, TransferError::UnsupportedKind { role: Role::Destination, .. }),
            "got {:?}",
            err
        );
    }
}

#[test]
fn unsupported_among_multiple_destinations_writes_nothing() {
    let mut page = PageSnapshot::new(vec![
        ContainerNode::new("src").with_control(ControlNode::text("f", "v")),
        ContainerNode::new("dst")
            .with_control(ControlNode::text("f", ""))
            .with_control(ControlNode::new("f", "input", Some("button"))),
    ]);
    let (from, to) = scopes(&page, "#src", "#dst");

    let err = copy(&mut page, &from, &to, "f", None, true).unwrap_err();

    assert!(matches!(err, TransferError::UnsupportedKind { .. }));
    assert_eq!(page.containers[1].controls[0].value, "", "validation precedes writes");
}

// =========================================================================
// set_value
// =========================================================================

#[test]
fn set_value_on_checkbox_and_text() {
    let mut page = order_and_search();
    let to = page.select("#search");

    set_value(&mut page, &json!(true), &to, "express", false).unwrap();
    set_value(&mut page, &json!("Globex"), &to, "customer", false).unwrap();

    assert!(checked(&page, "search", "express"));
    assert_eq!(text_value(&page, "search", "customer"), "Globex");
}

#[test]
fn set_value_string_on_checkbox_is_not_coerced() {
    let mut page = order_and_search();
    let to = page.select("#search");

    let err = set_value(&mut page, &json!("true"), &to, "express", false).unwrap_err();

    assert!(matches!(err, TransferError::InvalidLiteral { .. }));
    assert!(!checked(&page, "search", "express"));
}

#[test]
fn set_value_multiple_destinations() {
    let mut page = PageSnapshot::new(vec![
        ContainerNode::new("f")
            .with_control(ControlNode::text("code", ""))
            .with_control(ControlNode::new("code", "input", Some("hidden"))),
    ]);
    let to = page.select("#f");

    assert!(matches!(
        set_value(&mut page, &json!("X1"), &to, "code", false),
        Err(TransferError::Cardinality { found: 2, .. })
    ));
    assert_eq!(set_value(&mut page, &json!("X1"), &to, "code", true), Ok(2));
    assert!(page.containers[0].controls.iter().all(|c| c.value == "X1"));
}

#[test]
fn set_value_on_radio_is_unsupported() {
    let mut page = order_and_search();
    let to = page.select("#order");

    let err = set_value(&mut page, &json!("web"), &to, "channel", false).unwrap_err();

    assert!(matches!(err, TransferError::UnsupportedKind { role: Role::Destination, .. }));
}

// =========================================================================
// Custom provider
// =========================================================================

/// Provider with string handles, checking the engine never reaches the
/// string accessors of a checkbox or the checked accessors of a text field.
struct StrictProvider {
    text: String,
    checked: bool,
}

impl ElementProvider for StrictProvider {
    type Container = ();
    type Control = &'static str;

    fn find_by_name(&self, _container: (), name: &str) -> Vec<&'static str> {
        match name {
            "text" => vec!["text"],
            "box" => vec!["box"],
            _ => vec![],
        }
    }

    fn descriptor(&self, control: &'static str) -> ControlDescriptor {
        match control {
            "box" => ControlDescriptor::new("box", "input", Some("checkbox")),
            _ => ControlDescriptor::new("text", "input", None),
        }
    }

    fn string_value(&self, control: &'static str) -> String {
        assert_eq!(control, "text", "string read on a checkbox");
        self.text.clone()
    }

    fn set_string_value(&mut self, control: &'static str, value: &str) {
        assert_eq!(control, "text", "string write on a checkbox");
        self.text = value.to_string();
    }

    fn is_checked(&self, control: &'static str) -> bool {
        assert_eq!(control, "box", "checked read on a text field");
        self.checked
    }

    fn set_checked(&mut self, control: &'static str, checked: bool) {
        assert_eq!(control, "box", "checked write on a text field");
        self.checked = checked;
    }
}

#[test]
fn engine_uses_only_kind_appropriate_accessors() {
    let mut provider = StrictProvider {
        text: "-1".into(),
        checked: false,
    };

    copy(&mut provider, &[()], &[()], "text", Some("box"), false).unwrap();
    assert!(provider.checked);

    copy(&mut provider, &[()], &[()], "text", None, false).unwrap();
    assert_eq!(provider.text, "-1");

    assert!(copy(&mut provider, &[()], &[()], "box", Some("text"), false).is_err());
    assert_eq!(
        copy(&mut provider, &[], &[()], "text", None, false),
        Err(TransferError::ScopeCardinality { role: Role::Source, found: 0 })
    );
}
