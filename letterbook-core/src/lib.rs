// Public modules
pub mod errors;
pub mod grouping;
pub mod io;
pub mod models;
pub mod samples;
pub mod sections;
pub mod sorting;

// Re-export commonly used types for convenience
pub use errors::{IndexOutOfRange, InvalidItemError, LoadError};
pub use grouping::{build, group_key, partition_valid};
pub use io::{index_to_json, load_items, parse_items};
pub use models::{GroupKey, GroupedIndex, Section, Selection};
pub use samples::sample_fruits;
pub use sorting::{compare_case_insensitive, fold_for_sorting, sort_case_insensitive};
