//! Choice of set conversion for the two inputs of a jaccard computation.

use serde::{Deserialize, Serialize};

/// Tells for each input of [jaccard_index](crate::jaccard::jaccard_index) whether it must
/// be converted into a deduplicated set (`true`) or is already a set and is used as given (`false`).
///
/// The default converts both inputs.
/// An input used as given counts with its raw length, so it is the caller's responsibility
/// to ensure it has no duplicates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetMode {
    /// convert first input to a set
    pub convert_a: bool,
    /// convert second input to a set
    pub convert_b: bool,
}

impl Default for SetMode {
    fn default() -> Self {
        SetMode::convert_both()
    }
} // end of impl Default for SetMode

impl SetMode {
    pub fn new(convert_a: bool, convert_b: bool) -> Self {
        SetMode { convert_a, convert_b }
    }

    /// both inputs may have duplicates and are converted
    pub fn convert_both() -> Self {
        SetMode::new(true, true)
    }

    /// both inputs are already sets
    pub fn as_sets() -> Self {
        SetMode::new(false, false)
    }

    ///
    pub fn get_convert_a(&self) -> bool {
        self.convert_a
    }

    ///
    pub fn get_convert_b(&self) -> bool {
        self.convert_b
    }
} // end of impl SetMode

/// A single flag telling that both inputs are already sets.
/// `false` converts both inputs, `true` converts none.
impl From<bool> for SetMode {
    fn from(already_sets: bool) -> Self {
        SetMode::new(!already_sets, !already_sets)
    }
}

/// One "already a set" flag per input, first and second input respectively.
impl From<(bool, bool)> for SetMode {
    fn from(already_sets: (bool, bool)) -> Self {
        SetMode::new(!already_sets.0, !already_sets.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_and_pair_forms() {
        assert_eq!(SetMode::from(false), SetMode::default());
        assert_eq!(SetMode::from(true), SetMode::as_sets());
        let mixed = SetMode::from((false, true));
        assert!(mixed.get_convert_a());
        assert!(!mixed.get_convert_b());
        assert_eq!(SetMode::from((true, true)), SetMode::from(true));
    }

    #[test]
    fn test_json_config() {
        let mode = SetMode::new(true, false);
        let text = serde_json::to_string(&mode).unwrap();
        let reloaded: SetMode = serde_json::from_str(&text).unwrap();
        assert_eq!(mode, reloaded);
        //
        let parsed: SetMode = serde_json::from_str(r#"{"convert_a":false,"convert_b":true}"#).unwrap();
        assert_eq!(parsed, SetMode::from((true, false)));
        // a missing field is not guessed
        let res = serde_json::from_str::<SetMode>(r#"{"convert_a":true}"#);
        assert!(res.is_err());
        // neither is a bare scalar
        let res = serde_json::from_str::<SetMode>("true");
        assert!(res.is_err());
    }
} // end of mod tests
