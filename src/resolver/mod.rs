//! Model-definition tree resolution.
//!
//! This module flattens each item's model-definition tree into the
//! ordered (rename, model) pairs the report is built from.

pub mod tree_resolver;

pub use tree_resolver::TreeResolver;

use crate::resource_pack::DocumentSet;

/// One flattened rename rule: a display condition and the model path it
/// selects.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPair {
    /// Human-readable rename label, built from the "when" fragments on
    /// the path from the root to the leaf.
    pub rename: String,
    /// Normalized, namespace-qualified model path.
    pub model: String,
}

/// The resolver's output for one item.
#[derive(Debug, Clone)]
pub struct ItemPairs {
    /// Name of the pack the item came from.
    pub pack: String,
    /// Item name (e.g., "clock").
    pub item: String,
    /// Flattened pairs in resolution order. May be empty.
    pub pairs: Vec<ResolvedPair>,
}

/// Counters for recoverable conditions encountered during a run.
///
/// All of these are local and non-fatal; they are reported in one
/// summary line at the end of the run.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    /// Sub-trees that matched no known node shape.
    pub unrecognized_nodes: usize,
    /// Parent references naming documents absent from the corpus.
    pub unresolved_references: usize,
    /// Branches truncated because a document re-entered its own
    /// resolution path.
    pub cycles_detected: usize,
    /// Item definitions that failed to parse and were skipped.
    pub failed_documents: usize,
}

impl Diagnostics {
    /// True when nothing was skipped or truncated.
    pub fn is_clean(&self) -> bool {
        self.unrecognized_nodes == 0
            && self.unresolved_references == 0
            && self.cycles_detected == 0
            && self.failed_documents == 0
    }

    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &Diagnostics) {
        self.unrecognized_nodes += other.unrecognized_nodes;
        self.unresolved_references += other.unresolved_references;
        self.cycles_detected += other.cycles_detected;
        self.failed_documents += other.failed_documents;
    }

    /// One-line summary for the end of the run.
    pub fn summary(&self) -> String {
        format!(
            "{} malformed documents, {} unrecognized nodes, {} unresolved references, {} cycles",
            self.failed_documents,
            self.unrecognized_nodes,
            self.unresolved_references,
            self.cycles_detected
        )
    }
}

/// Resolve every item in the document set, in deterministic order.
pub fn resolve_all(documents: &DocumentSet, diagnostics: &mut Diagnostics) -> Vec<ItemPairs> {
    let resolver = TreeResolver::new(documents);

    documents
        .iter_items()
        .map(|item| ItemPairs {
            pack: item.pack.clone(),
            item: item.name.clone(),
            pairs: resolver.resolve(item, diagnostics),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_pack::ItemDefinition;

    #[test]
    fn test_diagnostics_merge_and_summary() {
        let mut a = Diagnostics::default();
        a.unrecognized_nodes = 2;
        a.cycles_detected = 1;

        let mut b = Diagnostics::default();
        b.unrecognized_nodes = 1;
        b.failed_documents = 3;

        a.merge(&b);
        assert_eq!(a.unrecognized_nodes, 3);
        assert_eq!(a.cycles_detected, 1);
        assert_eq!(a.failed_documents, 3);
        assert!(!a.is_clean());
        assert_eq!(
            a.summary(),
            "3 malformed documents, 3 unrecognized nodes, 0 unresolved references, 1 cycles"
        );
    }

    #[test]
    fn test_resolve_all_covers_every_item() {
        let mut documents = DocumentSet::new();
        documents.add_item(
            ItemDefinition::parse(
                "minecraft",
                "clock",
                "pack.zip",
                r#"{ "model": { "type": "minecraft:model", "model": "item/clock" } }"#,
            )
            .unwrap(),
        );
        documents.add_item(
            ItemDefinition::parse(
                "minecraft",
                "compass",
                "pack.zip",
                r#"{ "model": { "type": "minecraft:empty" } }"#,
            )
            .unwrap(),
        );

        let mut diagnostics = Diagnostics::default();
        let resolved = resolve_all(&documents, &mut diagnostics);

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].item, "clock");
        assert_eq!(resolved[0].pairs.len(), 1);
        // An item with no overrides still shows up, with zero pairs.
        assert_eq!(resolved[1].item, "compass");
        assert!(resolved[1].pairs.is_empty());
        assert!(diagnostics.is_clean());
    }
}
