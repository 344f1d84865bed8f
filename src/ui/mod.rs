pub mod formatting;

pub use formatting::{format_index_strip, format_markdown, format_plain, format_selection};
