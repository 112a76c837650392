use std::cmp::Ordering;

use crate::sighting::{search_order, Signature, Sighting};

/// A bound search strategy: answers "does any sighting carry this signature?"
pub trait SignatureSearch {
    fn contains(&self, target: Signature) -> bool;
}

// ---------------------------------------------------------------------------
// Linear
// ---------------------------------------------------------------------------

/// Scans sightings in their current order. No precondition, no mutation.
pub fn linear_contains(sightings: &[Sighting], target: Signature) -> bool {
    sightings.iter().any(|s| s.signature() == target)
}

/// Linear strategy bound to a borrowed collection.
#[derive(Debug, Clone, Copy)]
pub struct LinearScan<'a> {
    sightings: &'a [Sighting],
}

impl<'a> LinearScan<'a> {
    pub fn new(sightings: &'a [Sighting]) -> Self {
        Self { sightings }
    }
}

impl SignatureSearch for LinearScan<'_> {
    fn contains(&self, target: Signature) -> bool {
        linear_contains(self.sightings, target)
    }
}

// ---------------------------------------------------------------------------
// Binary
// ---------------------------------------------------------------------------

/// Sightings sorted by [`search_order`]. Only constructible by sorting, and
/// it holds the collection's mutable borrow, so nothing can reorder the
/// sightings while lookups run against them.
#[derive(Debug, Clone, Copy)]
pub struct SortedSightings<'a> {
    sightings: &'a [Sighting],
}

impl<'a> SortedSightings<'a> {
    /// Sort in place (stable) and freeze the result.
    pub fn sort(sightings: &'a mut [Sighting]) -> Self {
        sightings.sort_by(search_order);
        Self { sightings }
    }

    pub fn as_slice(&self) -> &'a [Sighting] {
        self.sightings
    }

    pub fn len(&self) -> usize {
        self.sightings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sightings.is_empty()
    }
}

impl SignatureSearch for SortedSightings<'_> {
    fn contains(&self, target: Signature) -> bool {
        binary_contains(self, target)
    }
}

/// Bisect on signature alone; the speed tie-break is irrelevant to a
/// yes/no lookup since any sighting with the target signature suffices.
pub fn binary_contains(sorted: &SortedSightings<'_>, target: Signature) -> bool {
    let sightings = sorted.as_slice();
    // `len() - 1` underflows on an empty slice.
    if sightings.is_empty() {
        return false;
    }

    let mut left = 0usize;
    let mut right = sightings.len() - 1;
    while left <= right {
        let mid = left + (right - left) / 2;
        match sightings[mid].signature().cmp(&target) {
            Ordering::Equal => return true,
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return false;
                }
                right = mid - 1;
            }
        }
    }
    false
}
