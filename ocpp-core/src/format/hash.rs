use core::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

/// Hash of a single value with fixed keys, stable for the life of the process.
pub(crate) fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
    BuildHasherDefault::<DefaultHasher>::default().hash_one(value)
}

/// Hash of a collection that does not depend on the order of its elements.
pub(crate) fn unordered_hash<'a, T: Hash + 'a>(items: impl IntoIterator<Item = &'a T>) -> u64 {
    items
        .into_iter()
        .fold(0u64, |acc, item| acc.wrapping_add(hash_of(item)))
}

/// Feeds a string into `state` so that strings differing only in ASCII case
/// hash alike.
pub(crate) fn hash_ignore_ascii_case<H: Hasher>(text: &str, state: &mut H) {
    for byte in text.bytes() {
        state.write_u8(byte.to_ascii_lowercase());
    }
    state.write_u8(0xff);
}

/// Keeps the first occurrence of every distinct element.
pub(crate) fn distinct<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Set comparison of two collections that were passed through `distinct`.
pub(crate) fn same_elements<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    left.len() == right.len() && left.iter().all(|item| right.contains(item))
}
