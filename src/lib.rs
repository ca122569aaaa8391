//! # Resourcepack Report
//!
//! A Rust library for extracting item rename rules from Minecraft
//! resource packs.
//!
//! ## Overview
//!
//! This library takes resource packs (ZIP files or directories) as
//! input, collects their item definitions, flattens each item's
//! model-definition tree into (rename, model) pairs, and produces a
//! browsable HTML report as output.
//!
//! ## Quick Start
//!
//! ```ignore
//! use resourcepack_report::{
//!     build_table, load_pack, render_report, resolve_all, Diagnostics,
//!     DocumentSet, ReportConfig, DEFAULT_TEMPLATE,
//! };
//!
//! // Collect item definitions from every pack
//! let mut documents = DocumentSet::new();
//! let mut diagnostics = Diagnostics::default();
//! load_pack("path/to/pack.zip", &mut documents, &mut diagnostics)?;
//!
//! // Flatten every item's model tree into (rename, model) pairs
//! let items = resolve_all(&documents, &mut diagnostics);
//!
//! // Build the table and render the report
//! let config = ReportConfig::default();
//! let table = build_table(&items, &config);
//! let html = render_report(&table, &config, DEFAULT_TEMPLATE)?;
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod resolver;
pub mod resource_pack;
pub mod table;

// Re-export main types for convenience
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use export::{render_report, DEFAULT_TEMPLATE};
pub use resolver::{resolve_all, Diagnostics, ItemPairs, ResolvedPair, TreeResolver};
pub use resource_pack::{DocumentSet, ItemDefinition, Node};
pub use table::{build as build_table, Column, PackSection, RenameTable, TableRow};

/// Load a resource pack (ZIP file or directory) into the document set.
/// Returns the number of item definitions loaded from this pack.
pub fn load_pack<P: AsRef<std::path::Path>>(
    path: P,
    documents: &mut DocumentSet,
    diagnostics: &mut Diagnostics,
) -> Result<usize> {
    resource_pack::loader::load_from_path(path.as_ref(), documents, diagnostics)
}

/// Load a resource pack from bytes (ZIP data).
pub fn load_pack_from_bytes(
    data: &[u8],
    pack_name: &str,
    documents: &mut DocumentSet,
    diagnostics: &mut Diagnostics,
) -> Result<usize> {
    resource_pack::loader::load_from_bytes(data, pack_name, documents, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use zip::write::SimpleFileOptions;

    #[test]
    fn test_end_to_end_report() {
        let clock = r#"{
            "model": {
                "type": "minecraft:select",
                "property": "minecraft:custom_model_data",
                "cases": [
                    {
                        "when": "Ykropsio v11 pink",
                        "model": { "type": "minecraft:model", "model": "item/clock/v11/v11pink" }
                    }
                ]
            }
        }"#;

        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        writer
            .start_file(
                "assets/minecraft/items/item/clock.json",
                SimpleFileOptions::default(),
            )
            .unwrap();
        writer.write_all(clock.as_bytes()).unwrap();
        let data = writer.finish().unwrap().into_inner();

        let mut documents = DocumentSet::new();
        let mut diagnostics = Diagnostics::default();
        load_pack_from_bytes(&data, "pack.zip", &mut documents, &mut diagnostics).unwrap();

        let items = resolve_all(&documents, &mut diagnostics);
        let config = ReportConfig::default();
        let table = build_table(&items, &config);

        assert_eq!(table.packs.len(), 1);
        assert_eq!(table.packs[0].pack, "pack.zip");
        assert_eq!(table.row_count(), 1);

        let row = &table.packs[0].rows[0];
        assert_eq!(row.rename, "Ykropsio v11 pink");
        assert_eq!(row.items, vec!["clock"]);
        assert_eq!(row.models, vec!["minecraft:item/clock/v11/v11pink"]);
        assert!(diagnostics.is_clean());

        let html = render_report(&table, &config, DEFAULT_TEMPLATE).unwrap();
        assert!(html.contains("Ykropsio v11 pink"));
        assert!(html.contains("minecraft:item/clock/v11/v11pink"));
    }
}
