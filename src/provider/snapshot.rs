use serde::{Deserialize, Serialize};

use crate::control::control_model::ControlDescriptor;
use crate::provider::provider::ElementProvider;

/// A serializable page model: containers (usually forms) holding named controls.
///
/// Loaded from JSON or YAML, mutated in place by transfers, and written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub containers: Vec<ContainerNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerNode {
    pub id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,

    #[serde(default)]
    pub controls: Vec<ControlNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlNode {
    pub name: String,

    #[serde(default = "default_tag")]
    pub tag: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub checked: bool,
}

fn default_tag() -> String {
    "input".to_string()
}

impl ControlNode {
    pub fn new(name: &str, tag: &str, input_type: Option<&str>) -> Self {
        ControlNode {
            name: name.to_string(),
            tag: tag.to_string(),
            input_type: input_type.map(str::to_string),
            value: String::new(),
            checked: false,
        }
    }

    pub fn text(name: &str, value: &str) -> Self {
        ControlNode::new(name, "input", Some("text")).with_value(value)
    }

    pub fn checkbox(name: &str, checked: bool) -> Self {
        ControlNode::new(name, "input", Some("checkbox")).with_checked(checked)
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

impl ContainerNode {
    pub fn new(id: &str) -> Self {
        ContainerNode {
            id: id.to_string(),
            classes: vec![],
            controls: vec![],
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_control(mut self, control: ControlNode) -> Self {
        self.controls.push(control);
        self
    }
}

/// Handle to a container inside a [`PageSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerRef(pub usize);

/// Handle to a control inside a [`PageSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlRef {
    pub container: usize,
    pub index: usize,
}

impl PageSnapshot {
    pub fn new(containers: Vec<ContainerNode>) -> Self {
        PageSnapshot {
            title: None,
            containers,
        }
    }

    /// Resolve a container selector.
    ///
    /// `#id` matches by id, `.class` by class, `*` matches every container
    /// and a bare word is treated as an id. Every match is returned so the
    /// caller can enforce cardinality.
    pub fn select(&self, selector: &str) -> Vec<ContainerRef> {
        let selector = selector.trim();

        self.containers
            .iter()
            .enumerate()
            .filter(|(_, c)| match selector {
                "*" => true,
                s if s.starts_with('.') => c.classes.iter().any(|cls| cls == &s[1..]),
                s => c.id == s.strip_prefix('#').unwrap_or(s),
            })
            .map(|(i, _)| ContainerRef(i))
            .collect()
    }

    pub fn control(&self, handle: ControlRef) -> Option<&ControlNode> {
        self.containers
            .get(handle.container)
            .and_then(|c| c.controls.get(handle.index))
    }

    /// First control named `name` inside the container with id `container_id`.
    pub fn find_control(&self, container_id: &str, name: &str) -> Option<&ControlNode> {
        self.containers
            .iter()
            .find(|c| c.id == container_id)
            .and_then(|c| c.controls.iter().find(|ctl| ctl.name == name))
    }

    fn node(&self, handle: ControlRef) -> &ControlNode {
        &self.containers[handle.container].controls[handle.index]
    }

    fn node_mut(&mut self, handle: ControlRef) -> &mut ControlNode {
        &mut self.containers[handle.container].controls[handle.index]
    }
}

// Handles only come from `select` / `find_by_name` on the same snapshot,
// so indexing below stays in bounds.
impl ElementProvider for PageSnapshot {
    type Container = ContainerRef;
    type Control = ControlRef;

    fn find_by_name(&self, container: ContainerRef, name: &str) -> Vec<ControlRef> {
        self.containers
            .get(container.0)
            .map(|c| {
                c.controls
                    .iter()
                    .enumerate()
                    .filter(|(_, ctl)| ctl.name == name)
                    .map(|(index, _)| ControlRef {
                        container: container.0,
                        index,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn descriptor(&self, control: ControlRef) -> ControlDescriptor {
        let node = self.node(control);
        ControlDescriptor::new(&node.name, &node.tag, node.input_type.as_deref())
    }

    fn string_value(&self, control: ControlRef) -> String {
        self.node(control).value.clone()
    }

    fn set_string_value(&mut self, control: ControlRef, value: &str) {
        self.node_mut(control).value = value.to_string();
    }

    fn is_checked(&self, control: ControlRef) -> bool {
        self.node(control).checked
    }

    fn set_checked(&mut self, control: ControlRef, checked: bool) {
        self.node_mut(control).checked = checked;
    }
}

/// Parse a snapshot from JSON or YAML text. `format_hint` is a file extension.
pub fn parse_snapshot(
    content: &str,
    format_hint: Option<&str>,
) -> Result<PageSnapshot, Box<dyn std::error::Error>> {
    match format_hint {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(content)?),
        _ => Ok(serde_json::from_str(content)?),
    }
}

/// Load a snapshot file, choosing the format from its extension.
pub fn load_snapshot(path: &str) -> Result<PageSnapshot, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let ext = std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str());
    parse_snapshot(&content, ext)
}

/// Serialize a snapshot in the format matching `path`'s extension.
pub fn render_snapshot(
    snapshot: &PageSnapshot,
    path: Option<&str>,
    pretty: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let ext = path
        .map(std::path::Path::new)
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str());

    match ext {
        Some("yaml") | Some("yml") => Ok(serde_yaml::to_string(snapshot)?),
        _ if pretty => Ok(serde_json::to_string_pretty(snapshot)?),
        _ => Ok(serde_json::to_string(snapshot)?),
    }
}
