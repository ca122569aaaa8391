//! Building the rename table from resolved pairs.

use super::{Column, PackSection, RenameTable, TableRow};
use crate::config::ReportConfig;
use crate::resolver::ItemPairs;
use std::collections::HashMap;

/// Build the rename table from every item's resolved pairs.
///
/// With `group_by_rename` set, rows sharing an identical rename label
/// within one pack merge into a single row listing every distinct model
/// and contributing item in first-seen order. Without it, every
/// (item, rename, model) tuple keeps its own row in resolver order.
pub fn build(items: &[ItemPairs], config: &ReportConfig) -> RenameTable {
    let columns = resolve_columns(&config.columns_order);

    let mut packs: Vec<PackSection> = Vec::new();
    let mut pack_index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let index = *pack_index.entry(item.pack.clone()).or_insert_with(|| {
            packs.push(PackSection {
                pack: item.pack.clone(),
                rows: Vec::new(),
                all_items: Vec::new(),
            });
            packs.len() - 1
        });
        let section = &mut packs[index];

        if config.show_all_items_list && !section.all_items.contains(&item.item) {
            section.all_items.push(item.item.clone());
        }

        for pair in &item.pairs {
            if config.group_by_rename {
                merge_into_section(section, item, &pair.rename, &pair.model);
            } else {
                section.rows.push(TableRow {
                    items: vec![item.item.clone()],
                    rename: pair.rename.clone(),
                    models: vec![pair.model.clone()],
                });
            }
        }
    }

    RenameTable { columns, packs }
}

/// Resolve configured column names, ignoring unknown ones and keeping
/// the declared order.
fn resolve_columns(names: &[String]) -> Vec<Column> {
    let mut columns = Vec::new();
    for name in names {
        if let Some(column) = Column::from_name(name) {
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
    }
    columns
}

/// Merge one (rename, model) pair into the section's grouped rows.
fn merge_into_section(section: &mut PackSection, item: &ItemPairs, rename: &str, model: &str) {
    let position = section.rows.iter().position(|r| r.rename == rename);
    let row = match position {
        Some(position) => &mut section.rows[position],
        None => {
            section.rows.push(TableRow {
                items: Vec::new(),
                rename: rename.to_string(),
                models: Vec::new(),
            });
            section.rows.last_mut().unwrap()
        }
    };

    if !row.items.contains(&item.item) {
        row.items.push(item.item.clone());
    }
    if !row.models.iter().any(|m| m == model) {
        row.models.push(model.to_string());
    }
}
