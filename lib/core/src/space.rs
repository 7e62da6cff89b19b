//! Distance space types
//!
//! The metric a k-NN index is built for. A method declares the subset it
//! supports; pairing a method with any other space is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpaceType {
    #[serde(rename = "undefined")]
    Undefined,
    #[serde(rename = "l2")]
    L2,
    #[serde(rename = "cosinesimil")]
    CosineSimilarity,
    #[serde(rename = "linf")]
    LInf,
    #[serde(rename = "l1")]
    L1,
    #[serde(rename = "innerproduct")]
    InnerProduct,
    #[serde(rename = "hamming")]
    Hamming,
}

impl SpaceType {
    pub const ALL: [SpaceType; 7] = [
        SpaceType::Undefined,
        SpaceType::L2,
        SpaceType::CosineSimilarity,
        SpaceType::LInf,
        SpaceType::L1,
        SpaceType::InnerProduct,
        SpaceType::Hamming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceType::Undefined => "undefined",
            SpaceType::L2 => "l2",
            SpaceType::CosineSimilarity => "cosinesimil",
            SpaceType::LInf => "linf",
            SpaceType::L1 => "l1",
            SpaceType::InnerProduct => "innerproduct",
            SpaceType::Hamming => "hamming",
        }
    }
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpaceType::ALL
            .iter()
            .copied()
            .find(|space| space.as_str() == s)
            .ok_or_else(|| Error::UnknownSpace(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space_type() {
        for space in SpaceType::ALL {
            assert_eq!(space.as_str().parse::<SpaceType>().unwrap(), space);
        }
        assert!(matches!("cosine".parse::<SpaceType>(), Err(Error::UnknownSpace(ref s)) if s == "cosine"));
        assert!("L2".parse::<SpaceType>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&SpaceType::InnerProduct).unwrap();
        assert_eq!(json, "\"innerproduct\"");

        let parsed: SpaceType = serde_json::from_str("\"cosinesimil\"").unwrap();
        assert_eq!(parsed, SpaceType::CosineSimilarity);
        assert_eq!(parsed.to_string(), "cosinesimil");
    }
}
