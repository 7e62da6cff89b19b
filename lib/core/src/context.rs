//! Method component contexts
//!
//! A [`MethodComponentContext`] is what a user supplies for a component: the
//! component name and a possibly partial set of raw parameter values.
//! [`EffectiveValues`] is what validation hands back: every declared
//! parameter present, defaults filled in, nested choices resolved.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A raw parameter value as found in a method definition document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Boolean(bool),
    Integer(i64),
    String(String),
    /// A nested component selection, e.g. `{"name": "sq", "parameters": {...}}`
    Context(MethodComponentContext),
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Boolean(b) => write!(f, "{}", b),
            ParameterValue::Integer(i) => write!(f, "{}", i),
            ParameterValue::String(s) => write!(f, "{}", s),
            ParameterValue::Context(ctx) => write!(f, "{}", ctx),
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(b: bool) -> Self {
        ParameterValue::Boolean(b)
    }
}

impl From<i32> for ParameterValue {
    fn from(i: i32) -> Self {
        ParameterValue::Integer(i64::from(i))
    }
}

impl From<i64> for ParameterValue {
    fn from(i: i64) -> Self {
        ParameterValue::Integer(i)
    }
}

impl From<&str> for ParameterValue {
    fn from(s: &str) -> Self {
        ParameterValue::String(s.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(s: String) -> Self {
        ParameterValue::String(s)
    }
}

impl From<MethodComponentContext> for ParameterValue {
    fn from(ctx: MethodComponentContext) -> Self {
        ParameterValue::Context(ctx)
    }
}

/// User supplied configuration for one method component
///
/// Parameters are kept sorted by name, so iteration and serialization are
/// deterministic regardless of the order they were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodComponentContext {
    pub name: String,

    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterValue>,
}

impl MethodComponentContext {
    /// Create a context selecting `name` with no parameters set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Set a parameter, replacing any earlier value for the same name
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters.get(name)
    }
}

/// `sq{clip=true,type=fp16}`, or just the name when no parameters are set
impl fmt::Display for MethodComponentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.parameters.is_empty() {
            return Ok(());
        }

        f.write_str("{")?;
        for (i, (name, value)) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        f.write_str("}")
    }
}

/// A validated, fully defaulted parameter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EffectiveValue {
    Boolean(bool),
    Integer(i64),
    String(String),
    Component(EffectiveValues),
}

impl EffectiveValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            EffectiveValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            EffectiveValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            EffectiveValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_component(&self) -> Option<&EffectiveValues> {
        match self {
            EffectiveValue::Component(values) => Some(values),
            _ => None,
        }
    }

    /// The serialized form as a [`Value`]
    pub fn to_json(&self) -> Value {
        // every map key is a string, so conversion cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl fmt::Display for EffectiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectiveValue::Boolean(b) => write!(f, "{}", b),
            EffectiveValue::Integer(i) => write!(f, "{}", i),
            EffectiveValue::String(s) => write!(f, "{}", s),
            EffectiveValue::Component(values) => write!(f, "{}", values.name),
        }
    }
}

/// The output of validation and the only accepted input of compilation
///
/// Holds one entry per declared parameter, in declaration order. There is
/// no public constructor: a value of this type always comes from
/// [`MethodComponent::validate`](crate::MethodComponent::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveValues {
    name: String,
    values: Vec<(String, EffectiveValue)>,
}

impl EffectiveValues {
    pub(crate) fn new(name: String, values: Vec<(String, EffectiveValue)>) -> Self {
        Self { name, values }
    }

    /// Name of the component these values were validated against
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, parameter: &str) -> Option<&EffectiveValue> {
        self.values
            .iter()
            .find(|(name, _)| name == parameter)
            .map(|(_, value)| value)
    }

    /// Parameters in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EffectiveValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// `{"name": ..., "parameters": {...}}`, the same shape as a context, with
/// parameters in declaration order
impl Serialize for EffectiveValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Parameters<'a>(&'a [(String, EffectiveValue)]);

        impl Serialize for Parameters<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (name, value) in self.0 {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("parameters", &Parameters(&self.values))?;
        map.end()
    }
}
