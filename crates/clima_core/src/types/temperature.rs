//! Temperature kind vocabulary.
//!
//! Every stored monthly series is either the monthly maxima or the monthly
//! minima for a city. This module provides the two-valued kind enum with
//! parsing and display support shared by the store, server, and CLI layers.
//!
//! # Examples
//!
//! ```
//! use clima_core::types::temperature::TemperatureKind;
//!
//! let kind = TemperatureKind::Max;
//! assert_eq!(kind.as_str(), "max");
//! assert_eq!(kind.label(), "Maximum");
//!
//! // Parse from string (case-insensitive)
//! let min: TemperatureKind = "MIN".parse().unwrap();
//! assert_eq!(min, TemperatureKind::Min);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::KindError;

/// Kind of monthly temperature series: maxima or minima.
///
/// Serialised in lowercase ("max"/"min"), matching the values stored in
/// the `kind` column of the temperature table and accepted by the HTTP
/// `kind` query parameter.
///
/// # Variants
/// - `Max`: Monthly maximum temperatures
/// - `Min`: Monthly minimum temperatures
///
/// # Examples
///
/// ```
/// use clima_core::types::temperature::TemperatureKind;
///
/// assert_eq!(TemperatureKind::Max.as_str(), "max");
/// assert_eq!(TemperatureKind::Min.as_str(), "min");
///
/// let parsed: TemperatureKind = "max".parse().unwrap();
/// assert_eq!(parsed, TemperatureKind::Max);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureKind {
    /// Monthly maximum temperatures
    Max,

    /// Monthly minimum temperatures
    Min,
}

impl TemperatureKind {
    /// All kinds, in storage order.
    pub const ALL: [TemperatureKind; 2] = [TemperatureKind::Max, TemperatureKind::Min];

    /// Returns the lowercase storage token for this kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use clima_core::types::temperature::TemperatureKind;
    ///
    /// assert_eq!(TemperatureKind::Max.as_str(), "max");
    /// assert_eq!(TemperatureKind::Min.as_str(), "min");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureKind::Max => "max",
            TemperatureKind::Min => "min",
        }
    }

    /// Returns the capitalised display label for chart titles.
    ///
    /// # Examples
    ///
    /// ```
    /// use clima_core::types::temperature::TemperatureKind;
    ///
    /// assert_eq!(TemperatureKind::Max.label(), "Maximum");
    /// assert_eq!(TemperatureKind::Min.label(), "Minimum");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureKind::Max => "Maximum",
            TemperatureKind::Min => "Minimum",
        }
    }
}

impl FromStr for TemperatureKind {
    type Err = KindError;

    /// Parses a kind token (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use clima_core::types::temperature::TemperatureKind;
    ///
    /// let max: TemperatureKind = "max".parse().unwrap();
    /// assert_eq!(max, TemperatureKind::Max);
    ///
    /// // Case-insensitive
    /// let min: TemperatureKind = "Min".parse().unwrap();
    /// assert_eq!(min, TemperatureKind::Min);
    ///
    /// // Unknown kind returns error
    /// let result: Result<TemperatureKind, _> = "avg".parse();
    /// assert!(result.is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, KindError> {
        match s.to_lowercase().as_str() {
            "max" => Ok(TemperatureKind::Max),
            "min" => Ok(TemperatureKind::Min),
            _ => Err(KindError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for TemperatureKind {
    /// Formats as the lowercase storage token.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str() {
        assert_eq!(TemperatureKind::Max.as_str(), "max");
        assert_eq!(TemperatureKind::Min.as_str(), "min");
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(TemperatureKind::Max.label(), "Maximum");
        assert_eq!(TemperatureKind::Min.label(), "Minimum");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("max".parse::<TemperatureKind>().unwrap(), TemperatureKind::Max);
        assert_eq!("min".parse::<TemperatureKind>().unwrap(), TemperatureKind::Min);
    }

    #[test]
    fn test_kind_from_str_case_insensitive() {
        assert_eq!("MAX".parse::<TemperatureKind>().unwrap(), TemperatureKind::Max);
        assert_eq!("Min".parse::<TemperatureKind>().unwrap(), TemperatureKind::Min);
    }

    #[test]
    fn test_kind_from_str_unknown() {
        let result = "avg".parse::<TemperatureKind>();
        assert!(result.is_err());
        match result {
            Err(KindError::UnknownKind(token)) => assert_eq!(token, "avg"),
            _ => panic!("Expected UnknownKind error"),
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", TemperatureKind::Max), "max");
        assert_eq!(format!("{}", TemperatureKind::Min), "min");
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in TemperatureKind::ALL {
            let parsed: TemperatureKind = kind.as_str().parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&TemperatureKind::Max).unwrap();
        assert_eq!(json, "\"max\"");
        let parsed: TemperatureKind = serde_json::from_str("\"min\"").unwrap();
        assert_eq!(parsed, TemperatureKind::Min);
    }

    #[test]
    fn test_kind_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(TemperatureKind::Max);
        set.insert(TemperatureKind::Min);
        set.insert(TemperatureKind::Max);
        assert_eq!(set.len(), 2);
    }
}
