use colored::Colorize;
use letterbook_core::{GroupedIndex, Selection};

/// Format the index as markdown: one "##" header per section, one bullet per row
pub fn format_markdown(index: &GroupedIndex) -> String {
    let mut out = String::from("# Alphabetized Items\n\n");

    if index.is_empty() {
        out.push_str("_No items to display._\n");
        return out;
    }

    out.push_str(&format!(
        "**Items:** {} in {} sections\n",
        index.total_items(),
        index.section_count()
    ));

    for section in index.sections() {
        out.push_str(&format!("\n## {}\n\n", section.key));
        for item in &section.items {
            out.push_str(&format!("- {}\n", item));
        }
    }

    out
}

/// Format the index as plain text with highlighted section headers
pub fn format_plain(index: &GroupedIndex) -> String {
    let mut lines = Vec::new();

    for section in index.sections() {
        lines.push(section.key.as_str().bold().to_string());
        for item in &section.items {
            lines.push(format!("  {}", item));
        }
    }

    lines.join("\n")
}

/// Format the section index titles on one line, e.g. "A · B · C"
pub fn format_index_strip(index: &GroupedIndex) -> String {
    index.section_index_titles().join(" · ")
}

/// Format a resolved selection the way the row-touch handler reported it
pub fn format_selection(selection: &Selection<'_>) -> String {
    format!("The selected row contains: {}", selection.item)
}
