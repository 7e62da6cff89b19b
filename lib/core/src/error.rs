use thiserror::Error;

use crate::context::ParameterValue;
use crate::space::SpaceType;

pub type Result<T> = std::result::Result<T, Error>;

/// Defects in a schema definition, raised while it is being built.
///
/// These are programming errors: a schema that fails to build should stop
/// the process at startup rather than surface per request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Parameter '{parameter}' has no alternatives to choose from")]
    EmptyAlternativeSet { parameter: String },

    #[error("Parameter '{parameter}' registers alternative '{name}' more than once")]
    DuplicateAlternative { parameter: String, name: String },

    #[error("Component '{component}' declares parameter '{parameter}' more than once")]
    DuplicateParameter { component: String, parameter: String },

    #[error("Default value of parameter '{parameter}' does not satisfy its validator")]
    InvalidDefault { parameter: String },

    #[error("Default alternative '{name}' of parameter '{parameter}' is not registered")]
    UnknownDefaultAlternative { parameter: String, name: String },

    #[error("Description of component '{component}' references undeclared parameter '{parameter}'")]
    UndeclaredDescriptionParameter { component: String, parameter: String },
}

/// Rejection of a user supplied configuration. Validation stops at the
/// first one found.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unknown parameter: {name}")]
    UnknownParameter { name: String },

    #[error("Invalid value '{value}' for parameter '{parameter}'")]
    InvalidParameterValue { parameter: String, value: ParameterValue },

    #[error("Unknown alternative '{name}' for parameter '{parameter}'")]
    UnknownAlternative { parameter: String, name: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Space type '{space}' is not supported by method '{method}'")]
    UnsupportedSpace { method: String, space: SpaceType },

    #[error("Unknown space type: {0}")]
    UnknownSpace(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
