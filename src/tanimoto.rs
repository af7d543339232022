//! tanimoto index and distance of bitfields.
//!
//! Bitfields come either as slices of [Bit] values (one bit per item)
//! or packed in u64 words.

use log::{debug, trace};

use crate::bit::Bit;
use crate::error::MetricError;

fn check_lengths(len_a: usize, len_b: usize) -> Result<(), MetricError> {
    if len_a != len_b {
        debug!("tanimoto on bitfields of lengths {} and {}", len_a, len_b);
        return Err(MetricError::LengthMismatch { left: len_a, right: len_b });
    }
    Ok(())
}

fn tanimoto_from_counts(and_count: usize, or_count: usize) -> Result<f64, MetricError> {
    trace!("tanimoto and count : {}, or count : {}", and_count, or_count);
    if or_count == 0 {
        debug!("tanimoto index of two null bitfields");
        return Err(MetricError::EmptyUnion);
    }
    Ok(and_count as f64 / or_count as f64)
}

fn log_distance(index: f64) -> Result<f64, MetricError> {
    if index <= 0. {
        debug!("tanimoto distance of bitfields with no common bit");
        return Err(MetricError::ZeroSimilarity);
    }
    Ok(-index.log2())
}

#[cfg_attr(doc, katexit::katexit)]
/// Computes the tanimoto index of two bitfields
/// $$ T(a,b) = \frac{ \sum_i a_i \land b_i}{ \sum_i a_i \lor b_i} $$
///
/// Items are read as bits with [Bit::is_set], so any non null integer is a set bit.
///
/// Errors:
/// - [MetricError::LengthMismatch] if bitfields do not have the same length.
/// - [MetricError::EmptyUnion] if no bit is set in either bitfield.
///
/// ```
/// use setdistance::tanimoto_index;
///
/// let a = [1, 1, 0, 0];
/// let b = [1, 0, 0, 1];
/// let t = tanimoto_index(&a, &b).unwrap();
/// assert!((t - 1. / 3.).abs() < 1.0e-12);
/// ```
pub fn tanimoto_index<A: Bit, B: Bit>(a: &[A], b: &[B]) -> Result<f64, MetricError> {
    check_lengths(a.len(), b.len())?;
    let mut and_count = 0;
    let mut or_count = 0;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (x.is_set(), y.is_set());
        if x && y {
            and_count += 1;
        }
        if x || y {
            or_count += 1;
        }
    }
    tanimoto_from_counts(and_count, or_count)
} // end of tanimoto_index

/// Computes the tanimoto distance *-log2(tanimoto_index(a,b))*.
///
/// Besides errors of [tanimoto_index], returns [MetricError::ZeroSimilarity]
/// when bitfields have no common set bit.
pub fn tanimoto_distance<A: Bit, B: Bit>(a: &[A], b: &[B]) -> Result<f64, MetricError> {
    let index = tanimoto_index(a, b)?;
    log_distance(index)
}

/// Computes the tanimoto index of two bitfields packed in u64 words.
/// Lengths are compared in words.
pub fn tanimoto_index_packed(a: &[u64], b: &[u64]) -> Result<f64, MetricError> {
    check_lengths(a.len(), b.len())?;
    let mut and_count: usize = 0;
    let mut or_count: usize = 0;
    for (x, y) in a.iter().zip(b) {
        and_count += (x & y).count_ones() as usize;
        or_count += (x | y).count_ones() as usize;
    }
    tanimoto_from_counts(and_count, or_count)
} // end of tanimoto_index_packed

/// Computes the tanimoto distance of two packed bitfields.
pub fn tanimoto_distance_packed(a: &[u64], b: &[u64]) -> Result<f64, MetricError> {
    let index = tanimoto_index_packed(a, b)?;
    log_distance(index)
}

//========================================================================================

// end of mod tests
