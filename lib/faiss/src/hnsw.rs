//! The faiss HNSW method
//!
//! `m`, `ef_construction` and `ef_search` are positive integers defaulting
//! to the injected [`KnnSettings`]; `encoder` selects one of the
//! [`hnsw_encoders`]. Only `m` and the encoder reach the index description.
//! The ef parameters are build and search time knobs and travel through
//! the `parameters` map instead.

use knnspec_core::{
    DescriptionTemplate, KnnMethod, KnnSettings, MethodComponent, MethodComponentContext, Parameter,
    SchemaError,
};
use tracing::debug;

use crate::constants::{
    ENCODER_FLAT, FAISS_HNSW_DESCRIPTION, HNSW_SUPPORTED_SPACES, METHOD_ENCODER_PARAMETER, METHOD_HNSW,
    METHOD_PARAMETER_EF_CONSTRUCTION, METHOD_PARAMETER_EF_SEARCH, METHOD_PARAMETER_M,
};
use crate::encoder::hnsw_encoders;

/// Build the faiss HNSW method with defaults taken from `settings`.
///
/// Fails only if `settings` carries a default that is not positive.
pub fn hnsw_method(settings: &KnnSettings) -> Result<KnnMethod, SchemaError> {
    let component = MethodComponent::builder(METHOD_HNSW)
        .add_parameter(Parameter::integer(METHOD_PARAMETER_M, settings.algo_param_m, |v| *v > 0)?)
        .add_parameter(Parameter::integer(
            METHOD_PARAMETER_EF_CONSTRUCTION,
            settings.algo_param_ef_construction,
            |v| *v > 0,
        )?)
        .add_parameter(Parameter::integer(
            METHOD_PARAMETER_EF_SEARCH,
            settings.algo_param_ef_search,
            |v| *v > 0,
        )?)
        .add_parameter(encoder_parameter()?)
        .set_map_generator(
            DescriptionTemplate::builder(FAISS_HNSW_DESCRIPTION)
                .add_parameter(METHOD_PARAMETER_M, "", "")
                .add_parameter(METHOD_ENCODER_PARAMETER, ",", "")
                .build(),
        )
        .build()?;

    debug!(
        method = METHOD_HNSW,
        m = settings.algo_param_m,
        ef_construction = settings.algo_param_ef_construction,
        ef_search = settings.algo_param_ef_search,
        "built faiss method"
    );
    Ok(KnnMethod::new(component, HNSW_SUPPORTED_SPACES))
}

fn encoder_parameter() -> Result<Parameter, SchemaError> {
    let alternatives = hnsw_encoders()
        .iter()
        .map(|encoder| encoder.method_component())
        .collect::<Result<Vec<_>, _>>()?;

    Parameter::method_component_context(
        METHOD_ENCODER_PARAMETER,
        MethodComponentContext::new(ENCODER_FLAT),
        alternatives,
    )
}
