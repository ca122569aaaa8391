//! Rename table construction.
//!
//! The table is the structured middle ground between the resolver's raw
//! (rename, model) pairs and the rendered report: rows grouped per pack,
//! with the column set driven by configuration.

pub mod builder;

pub use builder::build;

/// A report column recognized by the table builder.
///
/// Configuration declares columns by name; unknown names are ignored and
/// missing ones are simply omitted from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Rename,
    Item,
    Model,
}

impl Column {
    /// Resolve a configured column name (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("rename") || name.eq_ignore_ascii_case("renames") {
            Some(Column::Rename)
        } else if name.eq_ignore_ascii_case("item") || name.eq_ignore_ascii_case("items") {
            Some(Column::Item)
        } else if name.eq_ignore_ascii_case("model") || name.eq_ignore_ascii_case("models") {
            Some(Column::Model)
        } else {
            None
        }
    }

    /// Header title for this column.
    pub fn title(&self) -> &'static str {
        match self {
            Column::Rename => "Rename",
            Column::Item => "Item",
            Column::Model => "Model",
        }
    }
}

/// One reportable rename rule, possibly merged from several pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Contributing item names, distinct, in first-seen order.
    pub items: Vec<String>,
    /// The rename label.
    pub rename: String,
    /// Model paths, distinct, in first-seen order.
    pub models: Vec<String>,
}

impl TableRow {
    /// The display text for one column of this row.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Rename => self.rename.clone(),
            Column::Item => self.items.join(", "),
            Column::Model => self.models.join(", "),
        }
    }
}

/// The rows (and optional item inventory) for one pack.
#[derive(Debug, Clone)]
pub struct PackSection {
    /// Pack name as shown in the report.
    pub pack: String,
    /// Rows in build order.
    pub rows: Vec<TableRow>,
    /// Every distinct item in the pack; empty unless the all-items list
    /// is enabled.
    pub all_items: Vec<String>,
}

/// The structured table handed to the report renderer.
#[derive(Debug, Clone)]
pub struct RenameTable {
    /// Columns in configured order.
    pub columns: Vec<Column>,
    /// Per-pack sections in first-seen pack order.
    pub packs: Vec<PackSection>,
}

impl RenameTable {
    /// Total number of rows across all packs.
    pub fn row_count(&self) -> usize {
        self.packs.iter().map(|p| p.rows.len()).sum()
    }
}
