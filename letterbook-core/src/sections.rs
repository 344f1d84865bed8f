use crate::errors::IndexOutOfRange;
use crate::grouping::group_key;
use crate::models::{GroupedIndex, Section, Selection};
use crate::sorting::compare_case_insensitive;

/// Read-only section/row accessors, answered straight from the precomputed index
impl GroupedIndex {
    /// Number of sections (one per distinct key)
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of items across all sections
    pub fn total_items(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Sections in display order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of rows in a section
    pub fn row_count(&self, section: usize) -> Result<usize, IndexOutOfRange> {
        Ok(self.section(section)?.items.len())
    }

    /// Header title of a section (its group key)
    pub fn header_title(&self, section: usize) -> Result<&str, IndexOutOfRange> {
        Ok(self.section(section)?.key.as_str())
    }

    /// Item at (section, row)
    pub fn item(&self, section: usize, row: usize) -> Result<&str, IndexOutOfRange> {
        let items = &self.section(section)?.items;
        items
            .get(row)
            .map(String::as_str)
            .ok_or(IndexOutOfRange::Row {
                section,
                row,
                count: items.len(),
            })
    }

    /// Resolve a selected row to its value. Nothing is mutated.
    pub fn select(&self, section: usize, row: usize) -> Result<Selection<'_>, IndexOutOfRange> {
        Ok(Selection {
            section,
            row,
            header: self.header_title(section)?,
            item: self.item(section, row)?,
        })
    }

    /// All header titles in order, for an alphabet index strip
    pub fn section_index_titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.key.as_str()).collect()
    }

    /// Section holding items that start like `text` (a key or any item)
    /// Returns None when no such section exists or `text` is empty
    pub fn section_for_key(&self, text: &str) -> Option<usize> {
        let key = group_key(text)?;
        self.sections
            .binary_search_by(|s| compare_case_insensitive(s.key.as_str(), key.as_str()))
            .ok()
    }

    fn section(&self, section: usize) -> Result<&Section, IndexOutOfRange> {
        self.sections.get(section).ok_or(IndexOutOfRange::Section {
            section,
            count: self.sections.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::IndexOutOfRange;
    use crate::grouping::build;
    use crate::models::{GroupedIndex, Selection};

    fn fruit_index() -> GroupedIndex {
        build(["Apple", "Orange", "Apricot", "Banana"]).unwrap()
    }

    #[test]
    fn test_counts() {
        let index = fruit_index();
        assert_eq!(index.section_count(), 3);
        assert_eq!(index.row_count(0), Ok(2));
        assert_eq!(index.row_count(1), Ok(1));
        assert_eq!(index.row_count(2), Ok(1));
        assert_eq!(index.total_items(), 4);
    }

    #[test]
    fn test_headers_and_items() {
        let index = fruit_index();
        assert_eq!(index.header_title(0), Ok("A"));
        assert_eq!(index.header_title(2), Ok("O"));
        assert_eq!(index.item(0, 1), Ok("Apricot"));
        assert_eq!(index.item(2, 0), Ok("Orange"));
        assert_eq!(index.section_index_titles(), vec!["A", "B", "O"]);
    }

    #[test]
    fn test_row_count_past_end_fails() {
        let index = fruit_index();
        assert_eq!(
            index.row_count(index.section_count()),
            Err(IndexOutOfRange::Section {
                section: 3,
                count: 3
            })
        );
    }

    #[test]
    fn test_empty_index_accessors_fail() {
        let index = build(Vec::<String>::new()).unwrap();
        assert!(index.row_count(0).is_err());
        assert!(index.header_title(0).is_err());
        assert!(index.item(0, 0).is_err());
        assert!(index.section_index_titles().is_empty());
    }

    #[test]
    fn test_item_out_of_range() {
        let index = fruit_index();
        assert_eq!(
            index.item(1, 1),
            Err(IndexOutOfRange::Row {
                section: 1,
                row: 1,
                count: 1
            })
        );
        assert_eq!(
            index.item(7, 0),
            Err(IndexOutOfRange::Section {
                section: 7,
                count: 3
            })
        );
    }

    #[test]
    fn test_select() {
        let index = fruit_index();
        assert_eq!(
            index.select(0, 0),
            Ok(Selection {
                section: 0,
                row: 0,
                header: "A",
                item: "Apple"
            })
        );
        // selecting twice yields the same row
        assert_eq!(index.select(0, 0), index.select(0, 0));
        assert!(index.select(3, 0).is_err());
    }

    #[test]
    fn test_selection_serializes() {
        let index = fruit_index();
        let json = serde_json::to_value(index.select(2, 0).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"section": 2, "row": 0, "header": "O", "item": "Orange"})
        );
    }

    #[test]
    fn test_section_for_key() {
        let index = fruit_index();
        assert_eq!(index.section_for_key("A"), Some(0));
        assert_eq!(index.section_for_key("banana split"), Some(1));
        assert_eq!(index.section_for_key("o"), Some(2));
        assert_eq!(index.section_for_key("Z"), None);
        assert_eq!(index.section_for_key(""), None);
    }
}
