//! Cluster level defaults for method parameters
//!
//! The defaults for `m`, `ef_construction` and `ef_search` are injected into
//! schema construction rather than read from global state, so a schema built
//! from a given [`KnnSettings`] always validates the same way.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

pub const DEFAULT_ALGO_PARAM_M: i64 = 16;
pub const DEFAULT_ALGO_PARAM_EF_CONSTRUCTION: i64 = 100;
pub const DEFAULT_ALGO_PARAM_EF_SEARCH: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnnSettings {
    #[serde(default = "default_algo_param_m")]
    pub algo_param_m: i64,

    #[serde(default = "default_algo_param_ef_construction")]
    pub algo_param_ef_construction: i64,

    #[serde(default = "default_algo_param_ef_search")]
    pub algo_param_ef_search: i64,
}

fn default_algo_param_m() -> i64 {
    DEFAULT_ALGO_PARAM_M
}

fn default_algo_param_ef_construction() -> i64 {
    DEFAULT_ALGO_PARAM_EF_CONSTRUCTION
}

fn default_algo_param_ef_search() -> i64 {
    DEFAULT_ALGO_PARAM_EF_SEARCH
}

impl Default for KnnSettings {
    fn default() -> Self {
        Self {
            algo_param_m: DEFAULT_ALGO_PARAM_M,
            algo_param_ef_construction: DEFAULT_ALGO_PARAM_EF_CONSTRUCTION,
            algo_param_ef_search: DEFAULT_ALGO_PARAM_EF_SEARCH,
        }
    }
}

impl KnnSettings {
    /// Load settings from a JSON file. Missing keys keep their defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
