use knnspec_core::{MethodComponent, SchemaError};

use super::Encoder;
use crate::constants::ENCODER_FLAT;

/// Uncompressed vectors. Takes no parameters and adds nothing to the
/// index description.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatEncoder;

impl Encoder for FlatEncoder {
    fn name(&self) -> &'static str {
        ENCODER_FLAT
    }

    fn method_component(&self) -> Result<MethodComponent, SchemaError> {
        MethodComponent::builder(ENCODER_FLAT).build()
    }
}
