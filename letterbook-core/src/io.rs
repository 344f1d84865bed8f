use crate::errors::LoadError;
use crate::models::GroupedIndex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Accepted shapes of an item list file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ItemList {
    Bare(Vec<String>),
    Document { items: Vec<String> },
}

/// Parse an item list from JSON
/// Accepts either a bare array of strings or an object with an "items" array
pub fn parse_items(json: &str) -> Result<Vec<String>, LoadError> {
    let list: ItemList = serde_json::from_str(json)?;
    Ok(match list {
        ItemList::Bare(items) | ItemList::Document { items } => items,
    })
}

/// Load an item list from a JSON file
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let contents = fs::read_to_string(path)?;
    parse_items(&contents)
}

/// Render a built index as pretty-printed JSON
pub fn index_to_json(index: &GroupedIndex) -> Result<String, LoadError> {
    Ok(serde_json::to_string_pretty(index)?)
}
