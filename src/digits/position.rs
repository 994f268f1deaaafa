//! Digit positions analysed by Benford tests.
use serde::{Deserialize, Serialize};

/// Which significant digit a test looks at.
///
/// - `First`: leading digit, bins 1..=9.
/// - `Second`: digit following the leading one, bins 0..=9.
///
/// There is no implicit position; every test names one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigitPosition {
    First,
    Second,
}

impl DigitPosition {
    /// Digit bins tested at this position, in ascending order.
    pub fn bins(self) -> std::ops::RangeInclusive<u8> {
        match self {
            DigitPosition::First => 1..=9,
            DigitPosition::Second => 0..=9,
        }
    }

    /// Number of histogram bins (9 or 10).
    pub fn n_bins(self) -> usize {
        match self {
            DigitPosition::First => 9,
            DigitPosition::Second => 10,
        }
    }

    /// Map a digit to its histogram slot, or `None` if the digit is not a bin
    /// at this position (e.g. 0 for the first digit).
    pub fn bin_index(self, digit: u8) -> Option<usize> {
        match self {
            DigitPosition::First if (1..=9).contains(&digit) => Some((digit - 1) as usize),
            DigitPosition::Second if digit <= 9 => Some(digit as usize),
            _ => None,
        }
    }
}

impl std::str::FromStr for DigitPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" | "1" => Ok(DigitPosition::First),
            "second" | "2" => Ok(DigitPosition::Second),
            other => Err(format!("unknown digit position '{other}'; expected 'first' or 'second'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify bin layout and slot mapping for both positions.
    //
    // Expect
    // ------
    // - First: 9 bins starting at 1, digit 0 has no slot.
    // - Second: 10 bins starting at 0, digit 0 maps to slot 0.
    fn bins_and_bin_index_agree_for_both_positions() {
        assert_eq!(DigitPosition::First.bins().collect::<Vec<_>>(), (1..=9).collect::<Vec<u8>>());
        assert_eq!(DigitPosition::First.n_bins(), 9);
        assert_eq!(DigitPosition::First.bin_index(0), None);
        assert_eq!(DigitPosition::First.bin_index(9), Some(8));

        assert_eq!(DigitPosition::Second.n_bins(), 10);
        assert_eq!(DigitPosition::Second.bin_index(0), Some(0));
        assert_eq!(DigitPosition::Second.bin_index(10), None);
    }

    #[test]
    // Purpose
    // -------
    // Only explicit position names parse; nothing falls back to the first
    // digit.
    //
    // Expect
    // ------
    // - Names and ordinals parse case-insensitively.
    // - Empty, blank and unknown names are rejected with the offending text.
    fn parses_position_names() {
        assert_eq!("First".parse::<DigitPosition>(), Ok(DigitPosition::First));
        assert_eq!("SECOND".parse::<DigitPosition>(), Ok(DigitPosition::Second));
        assert_eq!("2".parse::<DigitPosition>(), Ok(DigitPosition::Second));

        assert!("".parse::<DigitPosition>().is_err());
        assert!(" ".parse::<DigitPosition>().is_err());
        let err = "third".parse::<DigitPosition>().unwrap_err();
        assert!(err.contains("'third'"), "{err}");
    }
}
