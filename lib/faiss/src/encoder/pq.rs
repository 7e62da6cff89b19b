use knnspec_core::{DescriptionTemplate, MethodComponent, Parameter, SchemaError};

use super::Encoder;
use crate::constants::{
    ENCODER_PARAMETER_PQ_CODE_COUNT_LIMIT, ENCODER_PARAMETER_PQ_CODE_SIZE,
    ENCODER_PARAMETER_PQ_CODE_SIZE_DEFAULT, ENCODER_PARAMETER_PQ_M, ENCODER_PARAMETER_PQ_M_DEFAULT,
    ENCODER_PQ, FAISS_PQ_DESCRIPTION,
};

/// Product quantization for HNSW, rendered as `PQ{m}x{code_size}`.
///
/// Codebooks have to be learned, so an index using this encoder needs a
/// training pass before vectors can be added.
#[derive(Debug, Clone, Copy, Default)]
pub struct HnswPqEncoder;

impl Encoder for HnswPqEncoder {
    fn name(&self) -> &'static str {
        ENCODER_PQ
    }

    fn method_component(&self) -> Result<MethodComponent, SchemaError> {
        MethodComponent::builder(ENCODER_PQ)
            .add_parameter(Parameter::integer(
                ENCODER_PARAMETER_PQ_M,
                ENCODER_PARAMETER_PQ_M_DEFAULT,
                |v| *v > 0 && *v <= ENCODER_PARAMETER_PQ_CODE_COUNT_LIMIT,
            )?)
            .add_parameter(Parameter::integer(
                ENCODER_PARAMETER_PQ_CODE_SIZE,
                ENCODER_PARAMETER_PQ_CODE_SIZE_DEFAULT,
                |v| *v == ENCODER_PARAMETER_PQ_CODE_SIZE_DEFAULT,
            )?)
            .set_map_generator(
                DescriptionTemplate::builder(FAISS_PQ_DESCRIPTION)
                    .add_parameter(ENCODER_PARAMETER_PQ_M, "", "")
                    .add_parameter(ENCODER_PARAMETER_PQ_CODE_SIZE, "x", "")
                    .build(),
            )
            .requires_training(true)
            .build()
    }
}
