use knnspec_core::{DescriptionTemplate, MethodComponent, Parameter, SchemaError};

use super::Encoder;
use crate::constants::{
    ENCODER_SQ, FAISS_SQ_CLIP, FAISS_SQ_DESCRIPTION, FAISS_SQ_ENCODER_FP16, FAISS_SQ_ENCODER_TYPES,
    FAISS_SQ_TYPE,
};

/// 16 bit scalar quantization, rendered as `SQfp16` / `SQbf16`.
///
/// `clip` is not part of the description; it is passed through for the
/// ingest path, which clips vectors to the representable range.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqEncoder;

impl Encoder for SqEncoder {
    fn name(&self) -> &'static str {
        ENCODER_SQ
    }

    fn method_component(&self) -> Result<MethodComponent, SchemaError> {
        MethodComponent::builder(ENCODER_SQ)
            .add_parameter(Parameter::string(FAISS_SQ_TYPE, FAISS_SQ_ENCODER_FP16, |v| {
                FAISS_SQ_ENCODER_TYPES.contains(&v)
            })?)
            .add_parameter(Parameter::boolean(FAISS_SQ_CLIP, false, |_| true)?)
            .set_map_generator(
                DescriptionTemplate::builder(FAISS_SQ_DESCRIPTION)
                    .add_parameter(FAISS_SQ_TYPE, "", "")
                    .build(),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knnspec_core::{MethodComponentContext, ValidationError};

    #[test]
    fn test_sq_description() {
        let component = SqEncoder.method_component().unwrap();

        let default = component.validate(&MethodComponentContext::new("sq")).unwrap();
        assert_eq!(component.index_description(&default).as_deref(), Some("SQfp16"));

        let bf16 = component
            .validate(
                &MethodComponentContext::new("sq")
                    .with_parameter("type", "bf16")
                    .with_parameter("clip", true),
            )
            .unwrap();
        assert_eq!(component.index_description(&bf16).as_deref(), Some("SQbf16"));
    }

    #[test]
    fn test_sq_rejects_unknown_type() {
        let component = SqEncoder.method_component().unwrap();
        let result = component.validate(&MethodComponentContext::new("sq").with_parameter("type", "int8"));
        assert!(matches!(
            result,
            Err(ValidationError::InvalidParameterValue { ref parameter, .. }) if parameter == "type"
        ));

        let result = component.validate(&MethodComponentContext::new("sq").with_parameter("clip", "yes"));
        assert!(matches!(
            result,
            Err(ValidationError::InvalidParameterValue { ref parameter, .. }) if parameter == "clip"
        ));
    }
}
