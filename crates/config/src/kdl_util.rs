//! KDL helpers for reading and writing `section { key value }` documents.

use kdl::{KdlDocument, KdlEntry, KdlNode, KdlValue};

use crate::value::ConfigValue;

/// Converts a KDL value to a setting value.
///
/// Floats and `#null` have no setting counterpart and read as absent, as do
/// integers outside the `i64` range.
pub fn value_from_kdl(value: &KdlValue) -> Option<ConfigValue> {
	if let Some(b) = value.as_bool() {
		Some(ConfigValue::Bool(b))
	} else if let Some(i) = value.as_integer() {
		i64::try_from(i).ok().map(ConfigValue::Int)
	} else {
		value.as_string().map(|s| ConfigValue::String(s.to_string()))
	}
}

/// Converts a setting value to a KDL value.
pub fn value_to_kdl(value: &ConfigValue) -> KdlValue {
	match value {
		ConfigValue::Bool(b) => KdlValue::Bool(*b),
		ConfigValue::Int(i) => KdlValue::Integer(i128::from(*i)),
		ConfigValue::String(s) => KdlValue::String(s.clone()),
	}
}

/// Returns the first positional argument of a node.
pub fn first_arg(node: &KdlNode) -> Option<&KdlValue> {
	node.entries().iter().find(|e| e.name().is_none()).map(|e| e.value())
}

/// Finds the last node named `name`, so later declarations win.
pub fn find_node<'a>(doc: &'a KdlDocument, name: &str) -> Option<&'a KdlNode> {
	doc.nodes().iter().rev().find(|n| n.name().value() == name)
}

/// Reads `section { key <value> }`.
pub fn get_setting(doc: &KdlDocument, section: &str, key: &str) -> Option<ConfigValue> {
	let children = find_node(doc, section)?.children()?;
	value_from_kdl(first_arg(find_node(children, key)?)?)
}

/// Lists the keys declared under `section`, deduplicated, in first-seen order.
pub fn setting_keys(doc: &KdlDocument, section: &str) -> Vec<String> {
	let mut keys: Vec<String> = Vec::new();
	for section_node in doc.nodes().iter().filter(|n| n.name().value() == section) {
		let Some(children) = section_node.children() else {
			continue;
		};
		for node in children.nodes() {
			let key = node.name().value();
			if !keys.iter().any(|k| k == key) {
				keys.push(key.to_string());
			}
		}
	}
	keys
}

/// Writes `section { key <value> }`, replacing any previous declaration of
/// `key` and creating the section when missing.
pub fn set_setting(doc: &mut KdlDocument, section: &str, key: &str, value: &ConfigValue) {
	let nodes = doc.nodes_mut();
	let idx = match nodes.iter().rposition(|n| n.name().value() == section) {
		Some(idx) => idx,
		None => {
			nodes.push(KdlNode::new(section));
			nodes.len() - 1
		}
	};

	let children = nodes[idx].ensure_children().nodes_mut();
	children.retain(|n| n.name().value() != key);

	let mut node = KdlNode::new(key);
	node.push(KdlEntry::new(value_to_kdl(value)));
	children.push(node);
}
