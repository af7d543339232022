//! Jaccard index of sets and Tanimoto index of bitfields.
//!
//! * [jaccard] computes the exact Jaccard index (and distance) of two collections,
//!   converting them to sets or using them as given according to a [SetMode].
//! * [tanimoto] computes the Tanimoto index of two equal length bitfields
//!   and the logarithmic distance  *-log2(index)*.
//!
//! Degenerate inputs (empty union, mismatched bitfield lengths, null similarity
//! in a logarithm) are reported as a [MetricError], never as NaN or infinity.

// for logging (debug mostly, switched at compile time in cargo.toml)
#[macro_use]
extern crate lazy_static;

pub mod bit;
pub mod error;
pub mod jaccard;
pub mod setmode;
pub mod tanimoto;

pub use bit::Bit;
pub use error::MetricError;
pub use jaccard::{jaccard_distance, jaccard_distance_of_sets, jaccard_index, jaccard_index_of_sets};
pub use setmode::SetMode;
pub use tanimoto::{
    tanimoto_distance, tanimoto_distance_packed, tanimoto_index, tanimoto_index_packed,
};

lazy_static! {
    #[allow(dead_code)]
    pub static ref LOG: u64 = {
        let res = init_log();
        res
    };
}
// install a logger facility
// set RUST_LOG to trace, warn debug off ....
fn init_log() -> u64 {
    let _ = env_logger::Builder::from_default_env().try_init();
    log::info!("setdistance logger initialized from env");
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_and_reexports() {
        assert_eq!(*LOG, 1);
        let j = jaccard_index(&["a", "b"], &["b", "c"], SetMode::default()).unwrap();
        let t = tanimoto_index(&[true, true, false], &[false, true, true]).unwrap();
        // same sets written as membership bitfields over {a, b, c}
        assert_eq!(j, t);
    }
} // end of mod tests
