//! Method components
//!
//! A [`MethodComponent`] is the configurable surface of one algorithm or
//! algorithm variant: an ordered, immutable set of [`Parameter`]s and an
//! optional [`DescriptionTemplate`] that compiles validated values into the
//! native index description.

use ahash::AHashSet;
use serde_json::{Map, Value};
use tracing::debug;

use crate::context::{EffectiveValue, EffectiveValues, MethodComponentContext};
use crate::description::DescriptionTemplate;
use crate::error::{SchemaError, ValidationError};
use crate::parameter::Parameter;

/// Key of the compiled description in [`MethodComponent::as_map`] output
pub const INDEX_DESCRIPTION_PARAMETER: &str = "index_description";
/// Key of the component name in [`MethodComponent::as_map`] output
pub const NAME: &str = "name";
/// Key of the remaining parameters in [`MethodComponent::as_map`] output
pub const PARAMETERS: &str = "parameters";

/// Immutable schema of one method or encoder
#[derive(Debug, Clone)]
pub struct MethodComponent {
    name: String,
    parameters: Vec<Parameter>,
    map_generator: Option<DescriptionTemplate>,
    requires_training: bool,
}

impl MethodComponent {
    pub fn builder(name: impl Into<String>) -> MethodComponentBuilder {
        MethodComponentBuilder {
            name: name.into(),
            parameters: Vec::new(),
            map_generator: None,
            requires_training: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in declaration order
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn get_parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    pub fn map_generator(&self) -> Option<&DescriptionTemplate> {
        self.map_generator.as_ref()
    }

    /// Whether an index built with these values needs a training pass,
    /// taking the selected nested components into account.
    pub fn is_training_required(&self, values: &EffectiveValues) -> bool {
        if self.requires_training {
            return true;
        }

        values.iter().any(|(name, value)| match value {
            EffectiveValue::Component(nested) => self
                .get_parameter(name)
                .and_then(|p| p.alternative(nested.name()))
                .map_or(false, |alternative| alternative.is_training_required(nested)),
            _ => false,
        })
    }

    /// Validate `context` against this schema.
    ///
    /// Declared parameters are checked in order, missing ones taking their
    /// defaults; keys this schema does not declare are checked last. The
    /// first violation aborts validation.
    pub fn validate(&self, context: &MethodComponentContext) -> Result<EffectiveValues, ValidationError> {
        let mut values = Vec::with_capacity(self.parameters.len());

        for parameter in &self.parameters {
            let value = match context.get(parameter.name()) {
                Some(value) => parameter.resolve(value)?,
                None => parameter.resolve(&parameter.default_value())?,
            };
            values.push((parameter.name().to_string(), value));
        }

        if let Some(unknown) = context
            .parameters
            .keys()
            .find(|key| self.get_parameter(key).is_none())
        {
            return Err(ValidationError::UnknownParameter { name: unknown.clone() });
        }

        debug!(component = %self.name, parameters = values.len(), "validated method component");
        Ok(EffectiveValues::new(self.name.clone(), values))
    }

    /// Compile validated values into the native index description.
    ///
    /// `None` when this component has no template of its own.
    pub fn index_description(&self, values: &EffectiveValues) -> Option<String> {
        self.map_generator
            .as_ref()
            .map(|template| template.render(self, values))
    }

    /// Render validated values as
    /// `{"name", "index_description", "parameters"}`.
    ///
    /// Scalars compiled into the description are dropped from `parameters`;
    /// the rest pass through for the engine to read separately. Nested
    /// choices are rendered recursively, without their own description.
    pub fn as_map(&self, values: &EffectiveValues) -> Value {
        let mut parameters = Map::new();

        for (name, value) in values.iter() {
            let described = self
                .map_generator
                .as_ref()
                .map_or(false, |template| template.includes(name));

            match value {
                EffectiveValue::Component(nested) => {
                    let rendered = self
                        .get_parameter(name)
                        .and_then(|p| p.alternative(nested.name()))
                        .map(|alternative| {
                            let mut map = alternative.as_map(nested);
                            if let Value::Object(object) = &mut map {
                                object.remove(INDEX_DESCRIPTION_PARAMETER);
                            }
                            map
                        })
                        // no matching alternative only when `values` were
                        // validated against a different component
                        .unwrap_or_else(|| value.to_json());
                    parameters.insert(name.to_string(), rendered);
                }
                _ if described => {}
                scalar => {
                    parameters.insert(name.to_string(), scalar.to_json());
                }
            }
        }

        let mut map = Map::new();
        map.insert(NAME.to_string(), Value::String(self.name.clone()));
        if let Some(description) = self.index_description(values) {
            map.insert(INDEX_DESCRIPTION_PARAMETER.to_string(), Value::String(description));
        }
        map.insert(PARAMETERS.to_string(), Value::Object(parameters));
        Value::Object(map)
    }
}

/// Accumulates parameters for a [`MethodComponent`].
///
/// Consumed by [`build`](MethodComponentBuilder::build); the schema it
/// produces cannot be extended afterwards.
pub struct MethodComponentBuilder {
    name: String,
    parameters: Vec<Parameter>,
    map_generator: Option<DescriptionTemplate>,
    requires_training: bool,
}

impl MethodComponentBuilder {
    pub fn add_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn set_map_generator(mut self, template: DescriptionTemplate) -> Self {
        self.map_generator = Some(template);
        self
    }

    pub fn requires_training(mut self, requires_training: bool) -> Self {
        self.requires_training = requires_training;
        self
    }

    /// Freeze the schema.
    ///
    /// Duplicate parameter names are rejected rather than overridden, and
    /// the template may only reference declared parameters.
    pub fn build(self) -> Result<MethodComponent, SchemaError> {
        let mut seen = AHashSet::with_capacity(self.parameters.len());
        for parameter in &self.parameters {
            if !seen.insert(parameter.name()) {
                return Err(SchemaError::DuplicateParameter {
                    component: self.name,
                    parameter: parameter.name().to_string(),
                });
            }
        }

        if let Some(template) = &self.map_generator {
            if let Some(undeclared) = template
                .parameters()
                .iter()
                .find(|described| !seen.contains(described.name.as_str()))
            {
                return Err(SchemaError::UndeclaredDescriptionParameter {
                    component: self.name,
                    parameter: undeclared.name.clone(),
                });
            }
        }

        Ok(MethodComponent {
            name: self.name,
            parameters: self.parameters,
            map_generator: self.map_generator,
            requires_training: self.requires_training,
        })
    }
}
