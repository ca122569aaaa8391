//! Resource pack loading and parsing.
//!
//! This module handles loading Minecraft resource packs (ZIP files or
//! directories) and collecting their item definitions into a single
//! cross-pack lookup table used by the resolver.

pub mod item;
pub mod loader;

pub use item::{classify, Dispatch, DispatchCase, ItemDefinition, Node};

use std::collections::HashMap;

/// The corpus of item definitions loaded from every processed pack.
///
/// Built once after all packs are scanned, then only read. Model
/// references resolve against this table regardless of which pack they
/// came from, since packs may reference models across namespaces.
///
/// Every loaded definition is kept for enumeration (two packs may both
/// define the same item), but reference lookup is by resource id, where
/// the first-loaded definition wins.
#[derive(Debug, Default, Clone)]
pub struct DocumentSet {
    /// Every item definition, in load order.
    items: Vec<ItemDefinition>,
    /// Lookup index: namespace -> "item/<name>" -> position in `items`.
    index: HashMap<String, HashMap<String, usize>>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item definition under its namespace.
    pub fn add_item(&mut self, item: ItemDefinition) {
        let position = self.items.len();
        self.index
            .entry(item.namespace.clone())
            .or_default()
            .entry(format!("item/{}", item.name))
            .or_insert(position);
        self.items.push(item);
    }

    /// Look up an item definition by model reference
    /// (e.g., "minecraft:item/clock" or "item/clock").
    ///
    /// A reference without an `item/` prefix is retried with one, since
    /// packs commonly shorten references to the bare item name.
    pub fn get(&self, reference: &str) -> Option<&ItemDefinition> {
        let (namespace, path) = parse_resource_location(reference);
        let ns_index = self.index.get(namespace)?;

        if let Some(&position) = ns_index.get(path) {
            return Some(&self.items[position]);
        }
        if !path.starts_with("item/") {
            if let Some(&position) = ns_index.get(&format!("item/{}", path)) {
                return Some(&self.items[position]);
            }
        }
        None
    }

    /// Iterate every loaded definition in deterministic order
    /// (by pack, then by resource id).
    pub fn iter_items(&self) -> impl Iterator<Item = &ItemDefinition> {
        let mut items: Vec<&ItemDefinition> = self.items.iter().collect();
        items.sort_by(|a, b| (&a.pack, &a.id).cmp(&(&b.pack, &b.id)));
        items.into_iter()
    }

    /// Get the total number of item definitions.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Get all namespaces in the document set.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut namespaces: Vec<_> = self.index.keys().map(|s| s.as_str()).collect();
        namespaces.sort();
        namespaces
    }
}

/// Parse a resource location into namespace and path.
/// "minecraft:item/clock" -> ("minecraft", "item/clock")
/// "item/clock" -> ("minecraft", "item/clock")
fn parse_resource_location(resource_location: &str) -> (&str, &str) {
    if let Some((namespace, path)) = resource_location.split_once(':') {
        (namespace, path)
    } else {
        ("minecraft", resource_location)
    }
}

/// Normalize a model reference into a namespace-qualified path.
///
/// Leading slashes and a trailing `.json` are stripped, backslashes
/// become forward slashes, and bare locations gain the `minecraft:`
/// namespace.
pub fn normalize_model_path(reference: &str) -> String {
    let cleaned = reference.trim().trim_start_matches('/').replace('\\', "/");
    let cleaned = cleaned.strip_suffix(".json").unwrap_or(&cleaned);

    if cleaned.contains(':') {
        cleaned.to_string()
    } else {
        format!("minecraft:{}", cleaned)
    }
}
