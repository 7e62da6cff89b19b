//! Typed, validated, defaulted parameters
//!
//! Every [`Parameter`] owns a default value and a pure validator. The
//! default is checked against the validator when the parameter is built,
//! so a schema can never hand out a default it would itself reject.

use ahash::AHashSet;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

use crate::component::MethodComponent;
use crate::context::{EffectiveValue, MethodComponentContext, ParameterValue};
use crate::error::{SchemaError, ValidationError};

/// Pure predicate over a parameter value
pub type Validator<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

pub type StrValidator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// The kind of value a parameter holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Integer,
    String,
    Boolean,
    /// A nested component picked by name from a closed set of alternatives
    NestedChoice,
}

#[derive(Clone)]
enum ParameterSpec {
    Integer {
        default: i64,
        validator: Validator<i64>,
    },
    String {
        default: String,
        validator: StrValidator,
    },
    Boolean {
        default: bool,
        validator: Validator<bool>,
    },
    NestedChoice {
        default: MethodComponentContext,
        alternatives: Vec<MethodComponent>,
    },
}

/// A named slot of a [`MethodComponent`]
#[derive(Clone)]
pub struct Parameter {
    name: String,
    spec: ParameterSpec,
}

impl Parameter {
    /// Integer parameter. Values outside the predicate are rejected, never clamped.
    pub fn integer<F>(name: impl Into<String>, default: i64, validator: F) -> Result<Self, SchemaError>
    where
        F: Fn(&i64) -> bool + Send + Sync + 'static,
    {
        Self::checked(
            name.into(),
            ParameterSpec::Integer {
                default,
                validator: Arc::new(validator),
            },
        )
    }

    pub fn string<F>(name: impl Into<String>, default: impl Into<String>, validator: F) -> Result<Self, SchemaError>
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::checked(
            name.into(),
            ParameterSpec::String {
                default: default.into(),
                validator: Arc::new(validator),
            },
        )
    }

    pub fn boolean<F>(name: impl Into<String>, default: bool, validator: F) -> Result<Self, SchemaError>
    where
        F: Fn(&bool) -> bool + Send + Sync + 'static,
    {
        Self::checked(
            name.into(),
            ParameterSpec::Boolean {
                default,
                validator: Arc::new(validator),
            },
        )
    }

    /// Nested choice over a closed set of components, selected by name.
    ///
    /// Fails if `alternatives` is empty, registers a name twice, or if
    /// `default` does not select and validate against one of them.
    pub fn method_component_context(
        name: impl Into<String>,
        default: MethodComponentContext,
        alternatives: Vec<MethodComponent>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        if alternatives.is_empty() {
            return Err(SchemaError::EmptyAlternativeSet { parameter: name });
        }

        let mut seen = AHashSet::with_capacity(alternatives.len());
        for alternative in &alternatives {
            if !seen.insert(alternative.name()) {
                return Err(SchemaError::DuplicateAlternative {
                    parameter: name,
                    name: alternative.name().to_string(),
                });
            }
        }

        if !seen.contains(default.name.as_str()) {
            return Err(SchemaError::UnknownDefaultAlternative {
                parameter: name,
                name: default.name,
            });
        }

        Self::checked(name, ParameterSpec::NestedChoice { default, alternatives })
    }

    fn checked(name: String, spec: ParameterSpec) -> Result<Self, SchemaError> {
        let parameter = Self { name, spec };
        if parameter.resolve(&parameter.default_value()).is_err() {
            return Err(SchemaError::InvalidDefault { parameter: parameter.name });
        }
        Ok(parameter)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParameterKind {
        match &self.spec {
            ParameterSpec::Integer { .. } => ParameterKind::Integer,
            ParameterSpec::String { .. } => ParameterKind::String,
            ParameterSpec::Boolean { .. } => ParameterKind::Boolean,
            ParameterSpec::NestedChoice { .. } => ParameterKind::NestedChoice,
        }
    }

    pub fn default_value(&self) -> ParameterValue {
        match &self.spec {
            ParameterSpec::Integer { default, .. } => ParameterValue::Integer(*default),
            ParameterSpec::String { default, .. } => ParameterValue::String(default.clone()),
            ParameterSpec::Boolean { default, .. } => ParameterValue::Boolean(*default),
            ParameterSpec::NestedChoice { default, .. } => ParameterValue::Context(default.clone()),
        }
    }

    /// Check a raw value against this parameter's predicate.
    ///
    /// For a nested choice this means the selected alternative exists and
    /// accepts the nested parameters.
    pub fn validate(&self, value: &ParameterValue) -> bool {
        self.resolve(value).is_ok()
    }

    /// Names of the registered alternatives, in registration order.
    /// Empty for scalar parameters.
    pub fn alternative_names(&self) -> Vec<&str> {
        match &self.spec {
            ParameterSpec::NestedChoice { alternatives, .. } => {
                alternatives.iter().map(|c| c.name()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Look up a registered alternative by name
    pub fn alternative(&self, name: &str) -> Option<&MethodComponent> {
        match &self.spec {
            ParameterSpec::NestedChoice { alternatives, .. } => {
                alternatives.iter().find(|c| c.name() == name)
            }
            _ => None,
        }
    }

    /// Validate `value` and turn it into its effective form
    pub(crate) fn resolve(&self, value: &ParameterValue) -> Result<EffectiveValue, ValidationError> {
        trace!(parameter = %self.name, %value, "resolving parameter");

        let resolved = match (&self.spec, value) {
            (ParameterSpec::Integer { validator, .. }, ParameterValue::Integer(v)) if validator(v) => {
                Some(EffectiveValue::Integer(*v))
            }
            (ParameterSpec::String { validator, .. }, ParameterValue::String(v)) if validator(v.as_str()) => {
                Some(EffectiveValue::String(v.clone()))
            }
            (ParameterSpec::Boolean { validator, .. }, ParameterValue::Boolean(v)) if validator(v) => {
                Some(EffectiveValue::Boolean(*v))
            }
            (ParameterSpec::NestedChoice { alternatives, .. }, ParameterValue::Context(ctx)) => {
                let component = alternatives
                    .iter()
                    .find(|c| c.name() == ctx.name)
                    .ok_or_else(|| ValidationError::UnknownAlternative {
                        parameter: self.name.clone(),
                        name: ctx.name.clone(),
                    })?;
                Some(EffectiveValue::Component(component.validate(ctx)?))
            }
            _ => None,
        };

        resolved.ok_or_else(|| ValidationError::InvalidParameterValue {
            parameter: self.name.clone(),
            value: value.clone(),
        })
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Parameter");
        s.field("name", &self.name)
            .field("kind", &self.kind())
            .field("default", &self.default_value());
        if let ParameterSpec::NestedChoice { .. } = &self.spec {
            s.field("alternatives", &self.alternative_names());
        }
        s.finish()
    }
}
