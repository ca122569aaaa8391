//! Item definition parsing.
//!
//! Item definitions describe how an in-game item's displayed model varies
//! by condition. The JSON schema is duck-typed: node kinds are not tagged
//! consistently across schema versions, so each sub-tree is classified
//! once, at parse time, by inspecting which keys are present.

use crate::error::{ReportError, Result};
use serde_json::Value;

/// A parsed item definition from an `item/*.json` file.
#[derive(Debug, Clone)]
pub struct ItemDefinition {
    /// Full resource id (e.g., "minecraft:item/clock").
    pub id: String,
    /// Namespace portion of the id.
    pub namespace: String,
    /// Item name derived from the file stem (e.g., "clock").
    pub name: String,
    /// Name of the pack this definition came from.
    pub pack: String,
    /// Classified root node of the model-definition tree.
    pub root: Node,
}

impl ItemDefinition {
    /// Parse an item definition from raw JSON text.
    ///
    /// Fails when the text is not valid JSON or not a JSON object;
    /// unknown node shapes inside an otherwise valid document are not
    /// errors (they classify as [`Node::Unrecognized`]).
    pub fn parse(namespace: &str, name: &str, pack: &str, text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;

        if !value.is_object() {
            return Err(ReportError::InvalidResourcePack(format!(
                "item definition {}:{} is not a JSON object",
                namespace, name
            )));
        }

        Ok(Self {
            id: format!("{}:item/{}", namespace, name),
            namespace: namespace.to_string(),
            name: name.to_string(),
            pack: pack.to_string(),
            root: classify(&value),
        })
    }
}

/// One point in an item's model-definition tree.
///
/// Every variant resolves to a finite, ordered sequence of
/// (rename, model) pairs; see the resolver module.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A model-path string. May name another item definition, in which
    /// case the resolver follows it as a reference.
    Model(String),
    /// An optional own model with a parent to fall back to.
    Parent {
        model: Option<String>,
        parent: String,
    },
    /// An ordered list of child nodes (`models` array / composite).
    List(Vec<Node>),
    /// A typed dispatch: cases keyed by "when" values plus an optional
    /// fallback child.
    Dispatch(Dispatch),
    /// Any shape not matching a known variant. Resolves to zero pairs.
    Unrecognized,
}

/// A conditional dispatch node (`select`, `range_dispatch`, `condition`).
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    /// The property being dispatched on, when declared.
    pub property: Option<String>,
    /// Cases in declared order.
    pub cases: Vec<DispatchCase>,
    /// Fallback child, resolved without adding a condition fragment.
    pub fallback: Option<Box<Node>>,
}

/// One branch of a dispatch node.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchCase {
    /// Rendered "when" descriptor for this branch.
    pub when: String,
    /// The child node this branch selects.
    pub node: Node,
}

/// Classify a raw JSON sub-tree into a [`Node`].
///
/// Key presence decides the variant: `cases` / `entries` /
/// `on_true`/`on_false` mark the dispatch conventions, `models` marks a
/// composite list, and `model` / `parent` mark leaves and parent chains.
/// The inspection happens exactly once per sub-tree.
pub fn classify(value: &Value) -> Node {
    match value {
        Value::String(s) => Node::Model(s.clone()),
        Value::Array(children) => Node::List(children.iter().map(classify).collect()),
        Value::Object(obj) => classify_object(obj),
        _ => Node::Unrecognized,
    }
}

fn classify_object(obj: &serde_json::Map<String, Value>) -> Node {
    let property = obj
        .get("property")
        .and_then(Value::as_str)
        .map(str::to_string);

    // select: ordered cases, each pairing a "when" with a child model
    if let Some(cases) = obj.get("cases").and_then(Value::as_array) {
        let cases = cases
            .iter()
            .map(|case| DispatchCase {
                when: case.get("when").map(render_when).unwrap_or_default(),
                node: case.get("model").map(classify).unwrap_or(Node::Unrecognized),
            })
            .collect();
        return Node::Dispatch(Dispatch {
            property,
            cases,
            fallback: dispatch_fallback(obj),
        });
    }

    // range_dispatch: ordered threshold entries
    if let Some(entries) = obj.get("entries").and_then(Value::as_array) {
        let cases = entries
            .iter()
            .map(|entry| DispatchCase {
                when: entry.get("threshold").map(render_when).unwrap_or_default(),
                node: entry.get("model").map(classify).unwrap_or(Node::Unrecognized),
            })
            .collect();
        return Node::Dispatch(Dispatch {
            property,
            cases,
            fallback: dispatch_fallback(obj),
        });
    }

    // condition: two branches keyed on the property being true or false
    if obj.contains_key("on_true") || obj.contains_key("on_false") {
        let prop_name = property
            .as_deref()
            .map(|p| p.rsplit(':').next().unwrap_or(p).to_string());
        let branch_when = |v: bool| match &prop_name {
            Some(p) => format!("{}={}", p, v),
            None => v.to_string(),
        };
        let mut cases = Vec::new();
        if let Some(child) = obj.get("on_true") {
            cases.push(DispatchCase {
                when: branch_when(true),
                node: classify(child),
            });
        }
        if let Some(child) = obj.get("on_false") {
            cases.push(DispatchCase {
                when: branch_when(false),
                node: classify(child),
            });
        }
        return Node::Dispatch(Dispatch {
            property,
            cases,
            fallback: None,
        });
    }

    // composite: every child contributes, order preserved
    if let Some(models) = obj.get("models").and_then(Value::as_array) {
        return Node::List(models.iter().map(classify).collect());
    }

    if let Some(model) = obj.get("model") {
        match model {
            Value::String(s) => {
                if let Some(parent) = obj.get("parent").and_then(Value::as_str) {
                    return Node::Parent {
                        model: Some(s.clone()),
                        parent: parent.to_string(),
                    };
                }
                return Node::Model(s.clone());
            }
            // Wrapper objects ({"model": {...}} at the document root)
            // carry the real node one level down.
            Value::Object(_) | Value::Array(_) => return classify(model),
            _ => return Node::Unrecognized,
        }
    }

    if let Some(parent) = obj.get("parent").and_then(Value::as_str) {
        return Node::Parent {
            model: None,
            parent: parent.to_string(),
        };
    }

    if obj.get("type").and_then(Value::as_str) == Some("minecraft:empty") {
        return Node::List(Vec::new());
    }

    Node::Unrecognized
}

fn dispatch_fallback(obj: &serde_json::Map<String, Value>) -> Option<Box<Node>> {
    obj.get("fallback").map(|v| Box::new(classify(v)))
}

/// Render a "when" descriptor into its display fragment.
///
/// Strings render verbatim (trimmed); list-valued descriptors are
/// deduplicated, sorted, and comma-joined; object-valued descriptors
/// render as sorted key=value pairs.
pub fn render_when(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(values) => {
            let mut parts: Vec<String> = values
                .iter()
                .map(render_when)
                .filter(|s| !s.is_empty())
                .collect();
            parts.sort();
            parts.dedup();
            parts.join(", ")
        }
        Value::Object(obj) => {
            let mut parts: Vec<String> = obj
                .iter()
                .map(|(k, v)| format!("{}={}", k, render_when(v)))
                .collect();
            parts.sort();
            parts.join(", ")
        }
        Value::Null => String::new(),
    }
}
