#![allow(dead_code)]

use form_transfer::provider::snapshot::{ContainerNode, ControlNode, PageSnapshot};

/// Two forms sharing field names, the usual shape for copy tests.
///
/// `#order` is the source form, `#search` the destination.
pub fn order_and_search() -> PageSnapshot {
    let order = ContainerNode::new("order")
        .with_class("form")
        .with_control(ControlNode::text("customer", "ACME Corp"))
        .with_control(ControlNode::text("qty", "1"))
        .with_control(ControlNode::checkbox("agree", false))
        .with_control(ControlNode::checkbox("express", true))
        .with_control(ControlNode::new("region", "select", Some("select-one")).with_value("EU"))
        .with_control(ControlNode::new("channel", "input", Some("radio")).with_value("web"));

    let search = ContainerNode::new("search")
        .with_class("form")
        .with_control(ControlNode::text("customer", ""))
        .with_control(ControlNode::checkbox("qty", false))
        .with_control(ControlNode::text("agree", ""))
        .with_control(ControlNode::checkbox("express", false))
        .with_control(ControlNode::new("region", "select", None))
        .with_control(ControlNode::new("custName", "input", Some("hidden")))
        .with_control(ControlNode::new("channel", "input", Some("text")));

    PageSnapshot::new(vec![order, search])
}

pub fn text_value(snapshot: &PageSnapshot, container: &str, name: &str) -> String {
    snapshot
        .find_control(container, name)
        .map(|c| c.value.clone())
        .unwrap_or_else(|| panic!("no control {}[{}]", container, name))
}

pub fn checked(snapshot: &PageSnapshot, container: &str, name: &str) -> bool {
    snapshot
        .find_control(container, name)
        .map(|c| c.checked)
        .unwrap_or_else(|| panic!("no control {}[{}]", container, name))
}

/// A unique path under the system temp dir for file-based tests.
pub fn temp_path(file_name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("form-transfer-{}-{}", std::process::id(), file_name))
}
