//! Method definition documents
//!
//! The JSON a user hands in to describe the method of a k-NN field:
//!
//! ```json
//! {
//!   "name": "hnsw",
//!   "space_type": "l2",
//!   "parameters": { "m": 32, "encoder": { "name": "sq" } }
//! }
//! ```

use knnspec_core::{
    EffectiveValues, Error, KnnMethod, MethodComponentContext, ParameterValue, Result, SpaceType,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Space used when a document does not name one
pub const DEFAULT_SPACE: SpaceType = SpaceType::L2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDocument {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_type: Option<SpaceType>,

    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterValue>,
}

impl MethodDocument {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        data.parse()
    }

    pub fn space(&self) -> SpaceType {
        self.space_type.unwrap_or(DEFAULT_SPACE)
    }

    pub fn context(&self) -> MethodComponentContext {
        MethodComponentContext {
            name: self.name.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

impl FromStr for MethodDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Everything the engine needs from a validated document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledMethod {
    pub space_type: SpaceType,
    pub index_description: String,
    pub training_required: bool,
    pub method: Value,
    #[serde(skip)]
    pub values: EffectiveValues,
}

/// Validate `document` against `method` and compile it
pub fn compile_document(method: &KnnMethod, document: &MethodDocument) -> Result<CompiledMethod> {
    if document.name != method.name() {
        return Err(Error::UnknownMethod(document.name.clone()));
    }

    let space_type = document.space();
    let values = method.validate_with_space(&document.context(), space_type)?;
    let index_description = method.compile(&values);
    info!(method = method.name(), space = %space_type, %index_description, "compiled method document");

    Ok(CompiledMethod {
        space_type,
        training_required: method.is_training_required(&values),
        method: method.as_map(&values),
        index_description,
        values,
    })
}
