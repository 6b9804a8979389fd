//! Quicksort over catalog entries keyed by name.

use super::CatalogEntry;

/// Sort entries ascending by name in place.
///
/// Lomuto quicksort with the last element as pivot. Not stable. The smaller
/// partition is handled recursively and the larger one iteratively, which keeps
/// stack depth logarithmic even when the pivot choice degrades.
pub fn sort_by_name(entries: &mut [CatalogEntry]) {
    let mut rest = entries;
    while rest.len() > 1 {
        let current = std::mem::take(&mut rest);
        let pivot = partition(current);
        let (left, right) = current.split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            sort_by_name(left);
            rest = right;
        } else {
            sort_by_name(right);
            rest = left;
        }
    }
}

/// Partition around the last element; returns the pivot's final index.
fn partition(entries: &mut [CatalogEntry]) -> usize {
    let high = entries.len() - 1;
    let mut boundary = 0;
    for j in 0..high {
        if entries[j].name < entries[high].name {
            entries.swap(boundary, j);
            boundary += 1;
        }
    }
    entries.swap(boundary, high);
    boundary
}
