//! Quantity Value Object
//!
//! Preserves the visitor's literal input while normalizing it for
//! estimation. Non-numeric or sub-1 input never errors; it is quoted as a
//! single unit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested piece count, as typed by the visitor
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(String);

impl Quantity {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The literal text, untouched
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// No input at all; estimation stays absent until something is typed
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Unit count for estimation: integer parse, substituting 1 on parse
    /// failure or anything below 1
    pub fn units(&self) -> u32 {
        self.0
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n >= 1)
            .unwrap_or(1)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self("1".to_string())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one() {
        let quantity = Quantity::default();
        assert_eq!(quantity.as_str(), "1");
        assert_eq!(quantity.units(), 1);
    }

    #[test]
    fn test_numeric_input() {
        assert_eq!(Quantity::new("12").units(), 12);
        assert_eq!(Quantity::new(" 3 ").units(), 3);
    }

    #[test]
    fn test_non_numeric_normalizes_to_one() {
        let quantity = Quantity::new("abc");
        assert_eq!(quantity.units(), 1);
        assert_eq!(quantity.as_str(), "abc");
    }

    #[test]
    fn test_below_one_normalizes_to_one() {
        assert_eq!(Quantity::new("0").units(), 1);
        assert_eq!(Quantity::new("-4").units(), 1);
    }

    #[test]
    fn test_blank() {
        assert!(Quantity::new("").is_blank());
        assert!(!Quantity::default().is_blank());
    }
}
