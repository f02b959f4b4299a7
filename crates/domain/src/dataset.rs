//! Dataset kinds recognized by the scoring subsystem.
//!
//! Dataset dispatch goes through the [`DatasetKind`] enum rather than raw
//! strings, so comparator policies stay total and unknown dataset names are
//! rejected at the boundary with a typed error before any scoring happens.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Error raised when a string does not name a recognized dataset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported dataset: {value}")]
pub struct UnsupportedDatasetError {
    /// The rejected dataset string.
    pub value: String,
}

impl UnsupportedDatasetError {
    /// Create an error for the given dataset string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// The closed set of datasets the leaderboard scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    /// Numeric answers with tolerance, free-form text otherwise.
    Math,
    /// Boolean answers, free-form text otherwise.
    Logic,
    /// Structured (sequence/mapping) answers, free-form text otherwise.
    Cs,
}

impl DatasetKind {
    /// All recognized datasets, in declaration order.
    pub const ALL: [DatasetKind; 3] = [Self::Math, Self::Logic, Self::Cs];

    /// Wire name of the dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::Logic => "logic",
            Self::Cs => "cs",
        }
    }
}

impl Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = UnsupportedDatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "math" => Ok(Self::Math),
            "logic" => Ok(Self::Logic),
            "cs" => Ok(Self::Cs),
            other => Err(UnsupportedDatasetError::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_datasets() {
        assert_eq!("math".parse::<DatasetKind>().unwrap(), DatasetKind::Math);
        assert_eq!("logic".parse::<DatasetKind>().unwrap(), DatasetKind::Logic);
        assert_eq!("cs".parse::<DatasetKind>().unwrap(), DatasetKind::Cs);
    }

    #[test]
    fn rejects_unknown_dataset_with_typed_error() {
        let err = "unknown_dataset".parse::<DatasetKind>().unwrap_err();
        assert_eq!(err.value, "unknown_dataset");
        assert_eq!(err.to_string(), "Unsupported dataset: unknown_dataset");
    }

    #[test]
    fn rejects_case_variants() {
        // Dataset names are exact; "Math" is not a recognized dataset.
        assert!("Math".parse::<DatasetKind>().is_err());
        assert!("".parse::<DatasetKind>().is_err());
    }

    #[test]
    fn round_trips_through_serde() {
        for kind in DatasetKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: DatasetKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
