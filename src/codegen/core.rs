use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{Column, Row};

/// File name used when the markup document is exported.
pub const MARKUP_FILE: &str = "layout.html";
/// File name used when the stylesheet fragment is exported.
pub const STYLE_FILE: &str = "layout.css";

/// Appearance of the placeholder content block. Input-independent.
const PLACEHOLDER_STYLE: &str = ".box {
    background-color: #f3f3f3;
    border: 1px solid #d8dde6;
    padding: 0.5rem;
    text-align: center;
    color: #080707;
}
";

/// Generated artifact pair: markup document plus stylesheet fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub markup: String,
    pub style: String,
}

impl Artifacts {
    /// Write both artifacts into `dir`, returning the written paths.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<(PathBuf, PathBuf)> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let markup_path = dir.join(MARKUP_FILE);
        let style_path = dir.join(STYLE_FILE);
        fs::write(&markup_path, &self.markup)?;
        fs::write(&style_path, &self.style)?;
        Ok((markup_path, style_path))
    }
}

/// Serialize rows into the markup document and stylesheet fragment.
///
/// Pure and deterministic: structurally equal input yields byte-identical
/// output. Default-valued settings never emit a token, keeping the
/// generated class lists minimal.
pub fn generate(rows: &[Row]) -> Artifacts {
    let mut markup = String::from("<template>\n");

    for row in rows {
        markup.push_str("    <div class=\"");
        markup.push_str(&row_classes(row));
        markup.push_str("\">\n");

        for (idx, column) in row.columns.iter().enumerate() {
            markup.push_str("        <div class=\"");
            markup.push_str(&column_classes(row, column));
            markup.push_str("\">\n");
            // Position labels are 1-based and restart per row.
            markup.push_str(&format!(
                "            <div class=\"box\">Column {}</div>\n",
                idx + 1
            ));
            markup.push_str("        </div>\n");
        }

        markup.push_str("    </div>\n");
    }

    markup.push_str("</template>\n");

    Artifacts {
        markup,
        style: PLACEHOLDER_STYLE.to_string(),
    }
}

fn row_classes(row: &Row) -> String {
    let mut classes = vec!["slds-grid"];
    if row.multiple_rows {
        classes.push("slds-wrap");
    }
    if let Some(class) = row.horizontal_alignment.class() {
        classes.push(class);
    }
    if let Some(class) = row.vertical_alignment.class() {
        classes.push(class);
    }
    if let Some(class) = row.pull_boundaries.class() {
        classes.push(class);
    }
    if let Some(class) = row.padding.class() {
        classes.push(class);
    }
    classes.join(" ")
}

fn column_classes(row: &Row, column: &Column) -> String {
    let mut classes = vec!["slds-col".to_string()];
    if let Some(class) = column.padding.class() {
        classes.push(class.to_string());
    }
    match row.effective_flexibility(column).class() {
        // A flex mode replaces all size tokens, breakpoint overrides included.
        Some(class) => classes.push(class.to_string()),
        None => {
            classes.push(format!("slds-size_{}-of-12", column.size));
            if column.device_specific {
                classes.push(format!("slds-medium-size_{}-of-12", column.size_medium));
                classes.push(format!("slds-small-size_{}-of-12", column.size_small));
            }
        }
    }
    classes.join(" ")
}
