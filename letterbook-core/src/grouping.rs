use crate::errors::InvalidItemError;
use crate::models::{GroupKey, GroupedIndex, Section};
use crate::sorting::{compare_case_insensitive, sort_case_insensitive};
use std::collections::HashMap;
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Derive the group key of an item: its first grapheme, composed (NFC) and upper-cased
/// Returns None for the empty string
pub fn group_key(item: &str) -> Option<GroupKey> {
    let first = item.graphemes(true).next()?;
    let composed: String = first.nfc().collect();
    Some(GroupKey::new(composed.to_uppercase()))
}

/// Group items by first letter and sort both the keys and each bucket case-insensitively
/// Fails on the first empty item instead of dropping it
pub fn build<I, S>(items: I) -> Result<GroupedIndex, InvalidItemError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut groups: HashMap<GroupKey, Vec<String>> = HashMap::new();
    let mut total = 0usize;

    for (position, item) in items.into_iter().enumerate() {
        let item = item.into();
        let key = group_key(&item).ok_or(InvalidItemError { position })?;
        groups.entry(key).or_default().push(item);
        total += 1;
    }

    let mut sections: Vec<Section> = groups
        .into_iter()
        .map(|(key, mut items)| {
            sort_case_insensitive(&mut items);
            Section { key, items }
        })
        .collect();
    sections.sort_by(|a, b| compare_case_insensitive(a.key.as_str(), b.key.as_str()));

    debug!(items = total, sections = sections.len(), "built grouped index");

    Ok(GroupedIndex { sections })
}

/// Split items into those that can be grouped and the positions of those that cannot
/// For callers that prefer to filter invalid items before calling [`build`]
pub fn partition_valid<I, S>(items: I) -> (Vec<String>, Vec<usize>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut valid = Vec::new();
    let mut rejected = Vec::new();

    for (position, item) in items.into_iter().enumerate() {
        let item = item.into();
        if item.is_empty() {
            rejected.push(position);
        } else {
            valid.push(item);
        }
    }

    if !rejected.is_empty() {
        warn!(count = rejected.len(), positions = ?rejected, "skipped items without a group key");
    }

    (valid, rejected)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::sorting::fold_for_sorting;
    use proptest::prelude::*;

    fn items_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z0-9 \u{e9}\u{c9}\u{df}]{1,8}", 0..40)
    }

    fn permuted_items_strategy() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
        items_strategy().prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle()))
    }

    fn sorted_multiset(mut items: Vec<String>) -> Vec<String> {
        items.sort();
        items
    }

    proptest! {
        /// Property: the union of all buckets is exactly the input multiset.
        #[test]
        fn build_preserves_every_item(items in items_strategy()) {
            let index = build(items.clone()).unwrap();
            let flattened: Vec<String> = index
                .sections()
                .flat_map(|s| s.items.iter().cloned())
                .collect();
            prop_assert_eq!(sorted_multiset(flattened), sorted_multiset(items));
        }

        /// Property: every item sits under its own key, and no bucket is empty.
        #[test]
        fn items_sit_under_their_key(items in items_strategy()) {
            let index = build(items).unwrap();
            for section in index.sections() {
                prop_assert!(!section.items.is_empty());
                for item in &section.items {
                    let key = group_key(item);
                    prop_assert_eq!(key.as_ref(), Some(&section.key));
                }
            }
        }

        /// Property: keys strictly increase and buckets never decrease.
        #[test]
        fn keys_and_buckets_are_ordered(items in items_strategy()) {
            let index = build(items).unwrap();
            let keys: Vec<&str> = index.sections().map(|s| s.key.as_str()).collect();
            for pair in keys.windows(2) {
                prop_assert_eq!(
                    compare_case_insensitive(pair[0], pair[1]),
                    std::cmp::Ordering::Less
                );
            }
            for section in index.sections() {
                for pair in section.items.windows(2) {
                    prop_assert!(fold_for_sorting(&pair[0]) <= fold_for_sorting(&pair[1]));
                }
            }
        }

        /// Property: input order does not change the resulting structure.
        #[test]
        fn input_order_is_irrelevant((items, shuffled) in permuted_items_strategy()) {
            let original = build(items).unwrap();
            let permuted = build(shuffled).unwrap();
            prop_assert_eq!(original.section_count(), permuted.section_count());
            for (a, b) in original.sections().zip(permuted.sections()) {
                prop_assert_eq!(&a.key, &b.key);
                prop_assert_eq!(
                    sorted_multiset(a.items.clone()),
                    sorted_multiset(b.items.clone())
                );
            }
        }
    }
}
