//! Interactive HTML report rendering.
//!
//! The report is plain HTML plus one inline script and style block:
//! per-pack filtering, click-to-sort columns, drag-and-drop column
//! reordering, and a grouping toggle. The generated tables are
//! substituted into a page template through `{{TABLES}}` and
//! `{{TITLE}}` placeholders.

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::table::RenameTable;
use std::fmt::Write;

/// Placeholder replaced with the generated table markup.
const TABLES_PLACEHOLDER: &str = "{{TABLES}}";
/// Placeholder replaced with the configured report title.
const TITLE_PLACEHOLDER: &str = "{{TITLE}}";

/// Built-in page template, used when no template file is given.
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
</head>
<body>
<h1>{{TITLE}}</h1>
{{TABLES}}
</body>
</html>
"#;

/// Render the rename table into the page template.
///
/// The template must contain the `{{TABLES}}` placeholder; `{{TITLE}}`
/// is optional. All user-controlled text (pack names, item names,
/// labels, model paths, configured title and table class) is escaped.
pub fn render_report(table: &RenameTable, config: &ReportConfig, template: &str) -> Result<String> {
    if !template.contains(TABLES_PLACEHOLDER) {
        return Err(ReportError::InvalidTemplate(format!(
            "template has no {} placeholder",
            TABLES_PLACEHOLDER
        )));
    }

    let mut tables = render_tables(table, config);
    tables.push_str(REPORT_STYLE);
    tables.push_str(REPORT_SCRIPT);

    Ok(template
        .replace(TABLES_PLACEHOLDER, &tables)
        .replace(TITLE_PLACEHOLDER, &escape(&config.title)))
}

fn render_tables(table: &RenameTable, config: &ReportConfig) -> String {
    // Pre-size: ~80 bytes per cell plus per-pack scaffolding
    let capacity = 512 + table.row_count() * (table.columns.len() + 1) * 80;
    let mut out = String::with_capacity(capacity);

    for (index, section) in table.packs.iter().enumerate() {
        writeln!(out, "<h2>{}</h2>", escape(&section.pack)).unwrap();
        writeln!(out, "<div class=\"pack\" id=\"pack-{}\">", index).unwrap();

        out.push_str(
            "<div class=\"controls\">\n\
             <label><input type=\"checkbox\" class=\"toggle-grouping\" checked> Group by rename</label>\n\
             <input type=\"text\" class=\"filter-input\" placeholder=\"Filter items / models / renames...\">\n\
             </div>\n",
        );

        writeln!(
            out,
            "<table class=\"{}\" data-pack=\"{}\">",
            escape(&config.table_class),
            escape(&section.pack)
        )
        .unwrap();

        // Header row (draggable for column reordering)
        out.push_str("<thead><tr>");
        for column in &table.columns {
            write!(
                out,
                "<th draggable=\"true\" class=\"col-header\" data-col=\"{}\">{}</th>",
                column.title().to_ascii_lowercase(),
                column.title()
            )
            .unwrap();
        }
        out.push_str("</tr></thead>\n");

        out.push_str("<tbody>\n");
        for row in &section.rows {
            out.push_str("<tr class=\"data-row\">");
            for column in &table.columns {
                write!(out, "<td>{}</td>", escape(&row.cell(*column))).unwrap();
            }
            out.push_str("</tr>\n");
        }
        out.push_str("</tbody></table>\n");

        if !section.all_items.is_empty() {
            let open = if config.open_all_details { " open" } else { "" };
            writeln!(
                out,
                "<details{}><summary>All items ({})</summary>\n<ul>",
                open,
                section.all_items.len()
            )
            .unwrap();
            for item in &section.all_items {
                writeln!(out, "<li>{}</li>", escape(item)).unwrap();
            }
            out.push_str("</ul></details>\n");
        }

        out.push_str("</div>\n");
    }

    out
}

/// Escape text for HTML element and attribute contexts.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const REPORT_STYLE: &str = r#"
<style>
.default-table { border-collapse: collapse; width:100%; margin:6px 0; }
.default-table th, .default-table td { border:1px solid #ddd; padding:6px; text-align:left; }
.default-table th { background:#f6f6f6; }
.pack .controls { margin-bottom:6px; display:flex; gap:8px; align-items:center; }
.filter-input { flex:1; padding:6px; }
.col-header.dragging { opacity:0.5; }
th.asc::after { content: " \25B2"; }
th.desc::after { content: " \25BC"; }
</style>
"#;

const REPORT_SCRIPT: &str = r#"
<script>
// Table filter, header sorting, drag-drop column reorder, grouping toggle
document.addEventListener('DOMContentLoaded', function(){
  document.querySelectorAll('.pack').forEach(function(pack){
    const filter = pack.querySelector('.filter-input');
    const table = pack.querySelector('table');
    if(!filter || !table) return;
    filter.addEventListener('input', function(){
      const q = filter.value.trim().toLowerCase();
      table.querySelectorAll('tbody tr.data-row').forEach(function(tr){
        const text = tr.textContent.toLowerCase();
        tr.style.display = text.includes(q) ? '' : 'none';
      });
    });

    // Grouping toggle: hides the item column when unchecked
    const toggle = pack.querySelector('.toggle-grouping');
    if(toggle){
      toggle.addEventListener('change', function(){
        const idx = Array.from(table.tHead.rows[0].cells).findIndex(th=>th.dataset.col === 'item');
        if(idx>=0){
          table.querySelectorAll('tbody tr').forEach(function(tr){
            const cell = tr.cells[idx];
            if(cell) cell.style.display = toggle.checked ? '' : 'none';
          });
          table.tHead.rows[0].cells[idx].style.display = toggle.checked ? '' : 'none';
        }
      });
      if(!toggle.checked) toggle.dispatchEvent(new Event('change'));
    }

    // Sortable headers
    table.querySelectorAll('th').forEach(function(th, colIndex){
      th.style.cursor = 'pointer';
      th.addEventListener('click', function(){
        const tbody = table.tBodies[0];
        const rows = Array.from(tbody.rows);
        const asc = !th.classList.contains('asc');
        tbody.append(...rows.sort(function(a,b){
          const A = a.cells[colIndex].textContent.trim().toLowerCase();
          const B = b.cells[colIndex].textContent.trim().toLowerCase();
          return (A>B?1:-1) * (asc?1:-1);
        }));
        table.querySelectorAll('th').forEach(h=>h.classList.remove('asc','desc'));
        th.classList.add(asc?'asc':'desc');
      });

      // Drag-drop column reordering
      th.addEventListener('dragstart', function(e){
        e.dataTransfer.setData('text/plain', colIndex);
        th.classList.add('dragging');
      });
      th.addEventListener('dragend', function(){
        th.classList.remove('dragging');
      });
      th.addEventListener('dragover', function(e){
        e.preventDefault();
      });
      th.addEventListener('drop', function(e){
        e.preventDefault();
        const from = parseInt(e.dataTransfer.getData('text/plain'));
        const to = colIndex;
        if(from === to) return;
        const header = table.tHead.rows[0];
        const headerCells = Array.from(header.cells);
        const moved = headerCells.splice(from,1)[0];
        headerCells.splice(to,0,moved);
        header.innerHTML = '';
        headerCells.forEach(c=>header.appendChild(c));
        table.tBodies[0].querySelectorAll('tr').forEach(function(row){
          const cells = Array.from(row.cells);
          const mc = cells.splice(from,1)[0];
          cells.splice(to,0,mc);
          row.innerHTML = '';
          cells.forEach(c=>row.appendChild(c));
        });
      });
    });
  });
});
</script>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, PackSection, TableRow};

    fn sample_table() -> RenameTable {
        RenameTable {
            columns: vec![Column::Rename, Column::Item, Column::Model],
            packs: vec![PackSection {
                pack: "pack.zip".to_string(),
                rows: vec![TableRow {
                    items: vec!["clock".to_string()],
                    rename: "Ykropsio v11 pink".to_string(),
                    models: vec!["minecraft:item/clock/v11/v11pink".to_string()],
                }],
                all_items: vec!["clock".to_string()],
            }],
        }
    }

    #[test]
    fn test_render_report() {
        let config = ReportConfig::default();
        let html = render_report(&sample_table(), &config, DEFAULT_TEMPLATE).unwrap();

        assert!(html.contains("<h2>pack.zip</h2>"));
        assert!(html.contains("<td>Ykropsio v11 pink</td>"));
        assert!(html.contains("<td>minecraft:item/clock/v11/v11pink</td>"));
        assert!(html.contains("<title>Resourcepack report</title>"));
        assert!(html.contains("<details open>"));
        assert!(!html.contains(TABLES_PLACEHOLDER));
        assert!(!html.contains(TITLE_PLACEHOLDER));
    }

    #[test]
    fn test_columns_follow_declared_order() {
        let mut table = sample_table();
        table.columns = vec![Column::Model, Column::Rename];

        let config = ReportConfig::default();
        let html = render_report(&table, &config, DEFAULT_TEMPLATE).unwrap();

        let model = html.find(">Model</th>").unwrap();
        let rename = html.find(">Rename</th>").unwrap();
        assert!(model < rename);
    }

    #[test]
    fn test_details_closed_when_configured() {
        let mut config = ReportConfig::default();
        config.open_all_details = false;

        let html = render_report(&sample_table(), &config, DEFAULT_TEMPLATE).unwrap();
        assert!(html.contains("<details>"));
        assert!(!html.contains("<details open>"));
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let mut table = sample_table();
        table.packs[0].rows[0].rename = "<script>alert(1)</script>".to_string();
        table.packs[0].pack = "evil & \"pack\".zip".to_string();

        let config = ReportConfig::default();
        let html = render_report(&table, &config, DEFAULT_TEMPLATE).unwrap();

        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("evil &amp; &quot;pack&quot;.zip"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }

    #[test]
    fn test_template_without_placeholder_is_error() {
        let config = ReportConfig::default();
        let result = render_report(&sample_table(), &config, "<html></html>");
        assert!(result.is_err());
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<td>"), "&lt;td&gt;");
        assert_eq!(escape("it's \"fine\""), "it&#39;s &quot;fine&quot;");
        assert_eq!(escape("plain"), "plain");
    }
}
