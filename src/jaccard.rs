//! exact jaccard index and distance
//!
//! The inputs are slices which are converted to sets or used as given according to a [SetMode],
//! or already built [HashSet]s.

use log::{debug, trace};

use fxhash::FxHashSet;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use crate::error::MetricError;
use crate::setmode::SetMode;

/// A slice seen as a set.
/// If converted, its cardinal is the number of distinct items, else the slice length.
struct SetView<'a, T> {
    items: &'a [T],
    /// distinct items, used for membership
    members: FxHashSet<&'a T>,
    converted: bool,
}

impl<'a, T: Eq + Hash> SetView<'a, T> {
    fn new(items: &'a [T], converted: bool) -> Self {
        let members: FxHashSet<&'a T> = items.iter().collect();
        SetView { items, members, converted }
    }

    fn cardinal(&self) -> usize {
        if self.converted {
            self.members.len()
        } else {
            self.items.len()
        }
    }

    /// we scan the smaller view and probe the other one
    fn intersection_count(&self, other: &SetView<'a, T>) -> usize {
        let (small, large) = if self.cardinal() <= other.cardinal() {
            (self, other)
        } else {
            (other, self)
        };
        if small.converted {
            small.members.iter().filter(|&x| large.members.contains(x)).count()
        } else {
            small.items.iter().filter(|&x| large.members.contains(x)).count()
        }
    }
} // end of impl SetView

// |A ∪ B| = |A| + |B| - |A ∩ B|
fn jaccard_from_counts(inter: usize, card_a: usize, card_b: usize) -> Result<f64, MetricError> {
    let union = card_a + card_b - inter;
    trace!("jaccard inter : {}, card a : {}, card b : {}, union : {}", inter, card_a, card_b, union);
    if union == 0 {
        debug!("jaccard index of two empty sets");
        return Err(MetricError::EmptyUnion);
    }
    Ok(inter as f64 / union as f64)
} // end of jaccard_from_counts

#[cfg_attr(doc, katexit::katexit)]
/// Computes the jaccard index of two collections
/// $$ J(A,B) = \frac{|A \cap B|}{|A \cup B|} $$
///
/// mode tells for each input if it must be deduplicated (see [SetMode]). An input not converted
/// is assumed to have no duplicates.
/// Returns an error [MetricError::EmptyUnion] if both inputs are empty.
///
/// ```
/// use setdistance::{jaccard_index, SetMode};
///
/// let a = vec![1, 1, 2];
/// let b = vec![2, 3];
/// let j = jaccard_index(&a, &b, SetMode::default()).unwrap();
/// assert!((j - 1. / 3.).abs() < 1.0e-12);
/// ```
pub fn jaccard_index<T: Eq + Hash>(a: &[T], b: &[T], mode: SetMode) -> Result<f64, MetricError> {
    let view_a = SetView::new(a, mode.convert_a);
    let view_b = SetView::new(b, mode.convert_b);
    let inter = view_a.intersection_count(&view_b);
    jaccard_from_counts(inter, view_a.cardinal(), view_b.cardinal())
} // end of jaccard_index

/// Computes the jaccard distance *1 - jaccard_index(a, b, mode)*.
/// See [jaccard_index] for the arguments and errors.
pub fn jaccard_distance<T: Eq + Hash>(a: &[T], b: &[T], mode: SetMode) -> Result<f64, MetricError> {
    jaccard_index(a, b, mode).map(|j| 1. - j)
}

/// Computes the jaccard index of two sets already built.
/// Returns an error [MetricError::EmptyUnion] if both sets are empty.
pub fn jaccard_index_of_sets<T, S1, S2>(a: &HashSet<T, S1>, b: &HashSet<T, S2>) -> Result<f64, MetricError>
where
    T: Eq + Hash,
    S1: BuildHasher,
    S2: BuildHasher,
{
    let inter = if a.len() <= b.len() {
        a.iter().filter(|&x| b.contains(x)).count()
    } else {
        b.iter().filter(|&x| a.contains(x)).count()
    };
    jaccard_from_counts(inter, a.len(), b.len())
} // end of jaccard_index_of_sets

/// Computes the jaccard distance of two sets already built.
pub fn jaccard_distance_of_sets<T, S1, S2>(a: &HashSet<T, S1>, b: &HashSet<T, S2>) -> Result<f64, MetricError>
where
    T: Eq + Hash,
    S1: BuildHasher,
    S2: BuildHasher,
{
    jaccard_index_of_sets(a, b).map(|j| 1. - j)
}

//========================================================================================

// end of mod tests
