use thiserror::Error;

/// An input item that cannot produce a group key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("item #{} is empty and has no first character to group by", .position + 1)]
pub struct InvalidItemError {
    /// Zero-based position of the item in the input sequence
    pub position: usize,
}

/// Section or row coordinates outside the bounds of a built index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexOutOfRange {
    #[error("section {section} is out of range ({count} sections)")]
    Section { section: usize, count: usize },

    #[error("row {row} is out of range for section {section} ({count} rows)")]
    Row {
        section: usize,
        row: usize,
        count: usize,
    },
}

/// Failure to read an item list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read item list: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse item list: {0}")]
    Json(#[from] serde_json::Error),
}
