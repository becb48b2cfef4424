//! Airport code types.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Error returned when parsing an invalid IATA code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid IATA code: {reason}")]
pub struct InvalidIata {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// IATA codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `Iata` value is valid by construction.
///
/// # Examples
///
/// ```
/// use trip_finder::domain::Iata;
///
/// let bgy = Iata::parse("BGY").unwrap();
/// assert_eq!(bgy.as_str(), "BGY");
///
/// // Lowercase is rejected
/// assert!(Iata::parse("bgy").is_err());
///
/// // Wrong length is rejected
/// assert!(Iata::parse("BG").is_err());
/// assert!(Iata::parse("BGYY").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iata([u8; 3]);

impl Iata {
    /// Parse an IATA code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidIata> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidIata {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidIata {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Iata([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iata({})", self.as_str())
    }
}

impl fmt::Display for Iata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Iata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Iata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IataVisitor;

        impl Visitor<'_> for IataVisitor {
            type Value = Iata;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 3-letter uppercase IATA code")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Iata, E> {
                Iata::parse(v).map_err(|e| E::custom(format!("{e}: {v:?}")))
            }
        }

        deserializer.deserialize_str(IataVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_iata() {
        assert!(Iata::parse("BGY").is_ok());
        assert!(Iata::parse("STN").is_ok());
        assert!(Iata::parse("DUB").is_ok());
        assert!(Iata::parse("AAA").is_ok());
        assert!(Iata::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(Iata::parse("bgy").is_err());
        assert!(Iata::parse("Bgy").is_err());
        assert!(Iata::parse("BGy").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Iata::parse("").is_err());
        assert!(Iata::parse("B").is_err());
        assert!(Iata::parse("BG").is_err());
        assert!(Iata::parse("BGYY").is_err());
        assert!(Iata::parse("BERGAMO").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Iata::parse("B1Y").is_err());
        assert!(Iata::parse("B-Y").is_err());
        assert!(Iata::parse("B Y").is_err());
        assert!(Iata::parse("BÖY").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let code = Iata::parse("BGY").unwrap();
        assert_eq!(code.as_str(), "BGY");
        assert_eq!(code.to_string(), "BGY");
    }

    #[test]
    fn serde_roundtrip() {
        let code = Iata::parse("STN").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"STN\"");

        let back: Iata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Iata>("\"stn\"").is_err());
        assert!(serde_json::from_str::<Iata>("\"TOOLONG\"").is_err());
        assert!(serde_json::from_str::<Iata>("42").is_err());
    }
}
