//! The model-definition tree resolver.

use super::{Diagnostics, ResolvedPair};
use crate::resource_pack::{normalize_model_path, DocumentSet, ItemDefinition, Node};

/// Separator between condition fragments in a rename label.
const LABEL_SEPARATOR: &str = ", ";

/// Flattens item model-definition trees into (rename, model) pairs.
///
/// Resolution is a pure function of the node, the read-only document
/// set, and the visited-path stack: no document is ever mutated, and
/// every tree resolves to a finite, ordered pair sequence.
pub struct TreeResolver<'a> {
    documents: &'a DocumentSet,
}

impl<'a> TreeResolver<'a> {
    pub fn new(documents: &'a DocumentSet) -> Self {
        Self { documents }
    }

    /// Flatten one item's tree into its ordered (rename, model) pairs.
    ///
    /// An empty result is valid: the item has no overrides, or nothing
    /// in its tree resolved.
    pub fn resolve(&self, item: &ItemDefinition, diagnostics: &mut Diagnostics) -> Vec<ResolvedPair> {
        let mut pairs = Vec::new();
        let mut path = vec![item.id.clone()];
        self.resolve_node(&item.root, "", &mut path, &mut pairs, diagnostics);
        pairs
    }

    fn resolve_node(
        &self,
        node: &Node,
        label: &str,
        path: &mut Vec<String>,
        out: &mut Vec<ResolvedPair>,
        diagnostics: &mut Diagnostics,
    ) {
        match node {
            Node::Model(reference) => {
                self.resolve_model(reference, label, path, out, diagnostics);
            }
            Node::Parent { model, parent } => {
                // Own model wins over the parent; the parent is only
                // consulted when no own model is declared.
                match model {
                    Some(own) => self.resolve_model(own, label, path, out, diagnostics),
                    None => self.resolve_parent(parent, label, path, out, diagnostics),
                }
            }
            Node::List(children) => {
                for child in children {
                    self.resolve_node(child, label, path, out, diagnostics);
                }
            }
            Node::Dispatch(dispatch) => {
                for case in &dispatch.cases {
                    let child_label = join_label(label, &case.when);
                    self.resolve_node(&case.node, &child_label, path, out, diagnostics);
                }
                // A fallback describes no distinguishing condition, so
                // it inherits the label unchanged.
                if let Some(fallback) = &dispatch.fallback {
                    self.resolve_node(fallback, label, path, out, diagnostics);
                }
            }
            Node::Unrecognized => {
                diagnostics.unrecognized_nodes += 1;
            }
        }
    }

    /// Resolve a model-path string.
    ///
    /// The string is followed as a reference when the corpus holds a
    /// document under that id; otherwise it is a terminal model path.
    fn resolve_model(
        &self,
        reference: &str,
        label: &str,
        path: &mut Vec<String>,
        out: &mut Vec<ResolvedPair>,
        diagnostics: &mut Diagnostics,
    ) {
        if let Some(document) = self.documents.get(reference) {
            self.follow_reference(document, label, path, out, diagnostics);
            return;
        }

        out.push(ResolvedPair {
            rename: label.to_string(),
            model: normalize_model_path(reference),
        });
    }

    /// Resolve a parent reference, which always names another document.
    fn resolve_parent(
        &self,
        reference: &str,
        label: &str,
        path: &mut Vec<String>,
        out: &mut Vec<ResolvedPair>,
        diagnostics: &mut Diagnostics,
    ) {
        match self.documents.get(reference) {
            Some(document) => self.follow_reference(document, label, path, out, diagnostics),
            None => {
                diagnostics.unresolved_references += 1;
            }
        }
    }

    /// Recurse into a referenced document's root under the same label.
    ///
    /// The visited stack is path-local: ids are pushed on entry and
    /// popped on exit, so a document may legitimately appear on two
    /// independent, non-cyclic paths.
    fn follow_reference(
        &self,
        document: &ItemDefinition,
        label: &str,
        path: &mut Vec<String>,
        out: &mut Vec<ResolvedPair>,
        diagnostics: &mut Diagnostics,
    ) {
        if path.iter().any(|id| id == &document.id) {
            diagnostics.cycles_detected += 1;
            return;
        }

        path.push(document.id.clone());
        self.resolve_node(&document.root, label, path, out, diagnostics);
        path.pop();
    }
}

/// Append a condition fragment to an inherited label.
fn join_label(inherited: &str, fragment: &str) -> String {
    if fragment.is_empty() {
        inherited.to_string()
    } else if inherited.is_empty() {
        fragment.to_string()
    } else {
        format!("{}{}{}", inherited, LABEL_SEPARATOR, fragment)
    }
}
