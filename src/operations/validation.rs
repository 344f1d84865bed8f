/// Validation error with field and message
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Parse a "SECTION,ROW" selection into zero-based coordinates
pub fn parse_selection(selection: &str) -> Result<(usize, usize), ValidationError> {
    let invalid = |message: String| ValidationError {
        field: "select".to_string(),
        message,
    };

    let (section, row) = selection
        .split_once(',')
        .ok_or_else(|| invalid(format!("Expected SECTION,ROW but found '{}'", selection)))?;

    let section = section
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid(format!("Section '{}' is not a non-negative number", section.trim())))?;
    let row = row
        .trim()
        .parse::<usize>()
        .map_err(|_| invalid(format!("Row '{}' is not a non-negative number", row.trim())))?;

    Ok((section, row))
}
