//! Station code types.

use std::fmt;

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS code: {reason}")]
pub struct InvalidCrs {
    reason: &'static str,
}

/// A valid 3-letter CRS (Computer Reservation System) station code.
///
/// CRS codes are always 3 uppercase ASCII letters. Any `Crs` value is
/// valid by construction, so it can be spliced into an upstream URL path
/// without further escaping.
///
/// # Examples
///
/// ```
/// use departure_board::domain::Crs;
///
/// let pad = Crs::parse("PAD").unwrap();
/// assert_eq!(pad.as_str(), "PAD");
///
/// // Strict parsing rejects lowercase, user input goes through parse_normalized
/// assert!(Crs::parse("pad").is_err());
/// assert_eq!(Crs::parse_normalized(" pad ").unwrap(), pad);
///
/// assert!(Crs::parse("PA").is_err());
/// assert!(Crs::parse("PADD").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCrs {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidCrs {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Crs([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse user-supplied input, tolerating surrounding whitespace and
    /// lowercase letters.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCrs> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the CRS code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z]{3}") {
            let crs = Crs::parse(&s).unwrap();
            prop_assert_eq!(crs.as_str(), s.as_str());
        }

        /// Normalized parsing agrees with strict parsing of the uppercased input
        #[test]
        fn normalized_matches_uppercase(s in "[a-zA-Z]{3}") {
            let normalized = Crs::parse_normalized(&s).unwrap();
            prop_assert_eq!(normalized, Crs::parse(&s.to_ascii_uppercase()).unwrap());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,10}") {
            prop_assert!(Crs::parse(&s).is_err());
        }
    }
}
