//! Top-level k-NN methods
//!
//! A [`KnnMethod`] pairs a [`MethodComponent`] with the fixed set of
//! spaces it can be built for. This is the surface a method registry
//! talks to: which spaces are supported, validate a user context, compile
//! the validated values.

use serde_json::Value;
use tracing::debug;

use crate::component::MethodComponent;
use crate::context::{EffectiveValues, MethodComponentContext};
use crate::error::{Error, Result, ValidationError};
use crate::space::SpaceType;

#[derive(Debug, Clone)]
pub struct KnnMethod {
    component: MethodComponent,
    supported_spaces: &'static [SpaceType],
}

impl KnnMethod {
    pub fn new(component: MethodComponent, supported_spaces: &'static [SpaceType]) -> Self {
        Self {
            component,
            supported_spaces,
        }
    }

    pub fn name(&self) -> &str {
        self.component.name()
    }

    pub fn component(&self) -> &MethodComponent {
        &self.component
    }

    pub fn supported_spaces(&self) -> &'static [SpaceType] {
        self.supported_spaces
    }

    pub fn is_space_supported(&self, space: SpaceType) -> bool {
        self.supported_spaces.contains(&space)
    }

    pub fn validate_space(&self, space: SpaceType) -> Result<()> {
        if self.is_space_supported(space) {
            Ok(())
        } else {
            Err(Error::UnsupportedSpace {
                method: self.name().to_string(),
                space,
            })
        }
    }

    pub fn validate(&self, context: &MethodComponentContext) -> std::result::Result<EffectiveValues, ValidationError> {
        self.component.validate(context)
    }

    /// Check the space first, then the parameters
    pub fn validate_with_space(&self, context: &MethodComponentContext, space: SpaceType) -> Result<EffectiveValues> {
        self.validate_space(space)?;
        Ok(self.validate(context)?)
    }

    /// The native index description for validated values
    pub fn compile(&self, values: &EffectiveValues) -> String {
        let description = self.component.index_description(values).unwrap_or_default();
        debug!(method = self.name(), %description, "compiled index description");
        description
    }

    pub fn as_map(&self, values: &EffectiveValues) -> Value {
        self.component.as_map(values)
    }

    pub fn is_training_required(&self, values: &EffectiveValues) -> bool {
        self.component.is_training_required(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::DescriptionTemplate;
    use crate::parameter::Parameter;

    const SPACES: &[SpaceType] = &[SpaceType::L2, SpaceType::InnerProduct];

    fn method() -> KnnMethod {
        let component = MethodComponent::builder("ivf")
            .add_parameter(Parameter::integer("nlist", 4, |v| *v > 0).unwrap())
            .set_map_generator(DescriptionTemplate::builder("IVF").add_parameter("nlist", "", "").build())
            .requires_training(true)
            .build()
            .unwrap();
        KnnMethod::new(component, SPACES)
    }

    #[test]
    fn test_supported_spaces() {
        let method = method();
        assert_eq!(method.name(), "ivf");
        assert_eq!(method.supported_spaces(), SPACES);
        assert!(method.is_space_supported(SpaceType::L2));
        assert!(!method.is_space_supported(SpaceType::Hamming));
        assert!(method.validate_space(SpaceType::InnerProduct).is_ok());
        assert!(matches!(
            method.validate_space(SpaceType::L1),
            Err(Error::UnsupportedSpace { space: SpaceType::L1, .. })
        ));
    }

    #[test]
    fn test_validate_with_space() {
        let method = method();
        let ctx = MethodComponentContext::new("ivf").with_parameter("nlist", 128);

        let values = method.validate_with_space(&ctx, SpaceType::L2).unwrap();
        assert_eq!(method.compile(&values), "IVF128");
        assert!(method.is_training_required(&values));

        assert!(matches!(
            method.validate_with_space(&ctx, SpaceType::Hamming),
            Err(Error::UnsupportedSpace { .. })
        ));

        let bad = MethodComponentContext::new("ivf").with_parameter("nlist", 0);
        assert!(matches!(
            method.validate_with_space(&bad, SpaceType::L2),
            Err(Error::Validation(ValidationError::InvalidParameterValue { .. }))
        ));
    }

    #[test]
    fn test_compile_without_template_is_empty() {
        let component = MethodComponent::builder("flat").build().unwrap();
        let method = KnnMethod::new(component, SPACES);
        let values = method.validate(&MethodComponentContext::new("flat")).unwrap();
        assert_eq!(method.compile(&values), "");
    }
}
