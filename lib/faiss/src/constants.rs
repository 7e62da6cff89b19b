//! Names and literals shared with the faiss engine
//!
//! Parameter names are what users write in method definitions; description
//! tokens are what the faiss index factory parses. Both are part of the
//! persisted contract and must not change.

use knnspec_core::SpaceType;

pub const METHOD_HNSW: &str = "hnsw";
pub const METHOD_PARAMETER_M: &str = "m";
pub const METHOD_PARAMETER_EF_CONSTRUCTION: &str = "ef_construction";
pub const METHOD_PARAMETER_EF_SEARCH: &str = "ef_search";
pub const METHOD_ENCODER_PARAMETER: &str = "encoder";

pub const ENCODER_FLAT: &str = "flat";
pub const ENCODER_SQ: &str = "sq";
pub const ENCODER_PQ: &str = "pq";

pub const FAISS_SQ_TYPE: &str = "type";
pub const FAISS_SQ_CLIP: &str = "clip";
pub const FAISS_SQ_ENCODER_FP16: &str = "fp16";
pub const FAISS_SQ_ENCODER_BF16: &str = "bf16";
pub const FAISS_SQ_ENCODER_TYPES: &[&str] = &[FAISS_SQ_ENCODER_FP16, FAISS_SQ_ENCODER_BF16];

pub const ENCODER_PARAMETER_PQ_M: &str = "m";
pub const ENCODER_PARAMETER_PQ_CODE_SIZE: &str = "code_size";
pub const ENCODER_PARAMETER_PQ_M_DEFAULT: i64 = 1;
pub const ENCODER_PARAMETER_PQ_CODE_COUNT_LIMIT: i64 = 1024;
/// faiss HNSW only ships 8 bit PQ codes
pub const ENCODER_PARAMETER_PQ_CODE_SIZE_DEFAULT: i64 = 8;

pub const FAISS_HNSW_DESCRIPTION: &str = "HNSW";
pub const FAISS_SQ_DESCRIPTION: &str = "SQ";
pub const FAISS_PQ_DESCRIPTION: &str = "PQ";

/// Spaces the faiss HNSW method can be built for
pub const HNSW_SUPPORTED_SPACES: &[SpaceType] = &[
    SpaceType::Undefined,
    SpaceType::Hamming,
    SpaceType::L2,
    SpaceType::InnerProduct,
];
