//! Resource pack loading from ZIP files and directories.

use super::{DocumentSet, ItemDefinition};
use crate::error::{ReportError, Result};
use crate::resolver::Diagnostics;
use std::io::Read;
use std::path::Path;

/// Load a resource pack from a file path into the shared document set.
///
/// Supports both ZIP files and directories. Returns the number of item
/// definitions loaded from this pack.
pub fn load_from_path(
    path: &Path,
    documents: &mut DocumentSet,
    diagnostics: &mut Diagnostics,
) -> Result<usize> {
    let pack_name = pack_name_of(path);

    if path.is_dir() {
        load_from_directory(path, &pack_name, documents, diagnostics)
    } else {
        let data = std::fs::read(path)?;
        load_from_bytes(&data, &pack_name, documents, diagnostics)
    }
}

/// Load a resource pack from bytes (ZIP data).
pub fn load_from_bytes(
    data: &[u8],
    pack_name: &str,
    documents: &mut DocumentSet,
    diagnostics: &mut Diagnostics,
) -> Result<usize> {
    let cursor = std::io::Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor)?;

    let mut loaded = 0;

    // Iterate through all files in the archive
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let file_path = file.name().to_string();

        // Skip directories
        if file.is_dir() {
            continue;
        }

        if let Some((namespace, name)) = item_definition_path(&file_path) {
            let mut contents = String::new();
            if let Err(e) = file.read_to_string(&mut contents) {
                eprintln!("Warning: Failed to read {}: {}", file_path, e);
                diagnostics.failed_documents += 1;
                continue;
            }

            match ItemDefinition::parse(namespace, name, pack_name, &contents) {
                Ok(item) => {
                    documents.add_item(item);
                    loaded += 1;
                }
                Err(e) => {
                    // Log warning but continue
                    eprintln!(
                        "Warning: Failed to parse item definition {}/{}: {}",
                        namespace, name, e
                    );
                    diagnostics.failed_documents += 1;
                }
            }
        }
    }

    Ok(loaded)
}

/// Load a resource pack from an unpacked directory.
fn load_from_directory(
    path: &Path,
    pack_name: &str,
    documents: &mut DocumentSet,
    diagnostics: &mut Diagnostics,
) -> Result<usize> {
    // Look for assets directory
    let assets_path = path.join("assets");
    if !assets_path.exists() {
        return Err(ReportError::InvalidResourcePack(
            "No assets directory found".to_string(),
        ));
    }

    let mut loaded = 0;

    walk_json_files(path, path, &mut |relative, contents| {
        if let Some((namespace, name)) = item_definition_path(relative) {
            match ItemDefinition::parse(namespace, name, pack_name, contents) {
                Ok(item) => {
                    documents.add_item(item);
                    loaded += 1;
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse item definition {}/{}: {}",
                        namespace, name, e
                    );
                    diagnostics.failed_documents += 1;
                }
            }
        }
    })?;

    Ok(loaded)
}

/// Recognize an item-definition path inside a pack.
/// Returns (namespace, item name) if the path matches the convention
/// `assets/<namespace>/.../item(s)/<name>.json`.
pub fn item_definition_path(file_path: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = file_path.split('/').collect();

    if parts.len() < 4 || parts[0] != "assets" {
        return None;
    }

    let directory = parts[parts.len() - 2];
    if directory != "item" && directory != "items" {
        return None;
    }

    let name = parts.last()?.strip_suffix(".json")?;
    if name.is_empty() {
        return None;
    }

    Some((parts[1], name))
}

/// Derive the pack name shown in the report from its path.
fn pack_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Walk JSON files under a directory, calling the handler with each
/// file's slash-normalized path relative to the pack root.
fn walk_json_files<F>(base: &Path, dir: &Path, handler: &mut F) -> Result<()>
where
    F: FnMut(&str, &str),
{
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            walk_json_files(base, &path, handler)?;
        } else if path.extension().map(|e| e == "json").unwrap_or(false) {
            let relative = path
                .strip_prefix(base)
                .unwrap_or(&path)
                .to_string_lossy()
                .replace('\\', "/");

            let contents = std::fs::read_to_string(&path)?;
            handler(&relative, &contents);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const CLOCK_JSON: &str = r#"{
        "model": {
            "type": "minecraft:select",
            "property": "minecraft:custom_model_data",
            "cases": [
                { "when": "11", "model": { "type": "minecraft:model", "model": "item/clock/v11" } }
            ]
        }
    }"#;

    fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for (path, contents) in entries {
            writer
                .start_file(*path, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(contents.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_item_definition_path() {
        assert_eq!(
            item_definition_path("assets/minecraft/items/clock.json"),
            Some(("minecraft", "clock"))
        );
        assert_eq!(
            item_definition_path("assets/minecraft/items/item/clock.json"),
            Some(("minecraft", "clock"))
        );
        assert_eq!(
            item_definition_path("assets/mypack/models/item/wand.json"),
            Some(("mypack", "wand"))
        );
        assert_eq!(
            item_definition_path("assets/minecraft/blockstates/stone.json"),
            None
        );
        assert_eq!(item_definition_path("assets/minecraft/items/clock.png"), None);
        assert_eq!(item_definition_path("pack.mcmeta"), None);
        assert_eq!(item_definition_path("data/minecraft/item/test.json"), None);
    }

    #[test]
    fn test_load_from_zip_bytes() {
        let data = build_zip(&[
            ("assets/minecraft/items/clock.json", CLOCK_JSON),
            ("pack.mcmeta", r#"{ "pack": { "pack_format": 46 } }"#),
        ]);

        let mut documents = DocumentSet::new();
        let mut diagnostics = Diagnostics::default();
        let loaded = load_from_bytes(&data, "pack.zip", &mut documents, &mut diagnostics).unwrap();

        assert_eq!(loaded, 1);
        assert_eq!(documents.item_count(), 1);
        assert_eq!(diagnostics.failed_documents, 0);

        let item = documents.get("minecraft:item/clock").unwrap();
        assert_eq!(item.pack, "pack.zip");
    }

    #[test]
    fn test_load_counts_malformed_documents() {
        let data = build_zip(&[
            ("assets/minecraft/items/clock.json", CLOCK_JSON),
            ("assets/minecraft/items/broken.json", "{ not json"),
        ]);

        let mut documents = DocumentSet::new();
        let mut diagnostics = Diagnostics::default();
        let loaded = load_from_bytes(&data, "pack.zip", &mut documents, &mut diagnostics).unwrap();

        assert_eq!(loaded, 1);
        assert_eq!(diagnostics.failed_documents, 1);
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let items_dir = dir.path().join("assets").join("minecraft").join("items");
        std::fs::create_dir_all(&items_dir).unwrap();
        std::fs::write(items_dir.join("clock.json"), CLOCK_JSON).unwrap();

        let mut documents = DocumentSet::new();
        let mut diagnostics = Diagnostics::default();
        let loaded = load_from_path(dir.path(), &mut documents, &mut diagnostics).unwrap();

        assert_eq!(loaded, 1);
        assert!(documents.get("minecraft:item/clock").is_some());
    }

    #[test]
    fn test_directory_without_assets_is_invalid() {
        let dir = tempfile::tempdir().unwrap();

        let mut documents = DocumentSet::new();
        let mut diagnostics = Diagnostics::default();
        let result = load_from_path(dir.path(), &mut documents, &mut diagnostics);

        assert!(result.is_err());
    }
}
