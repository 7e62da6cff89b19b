//! # knnspec Faiss
//!
//! Method and encoder schemas for the faiss engine.
//!
//! - [`hnsw_method`] - HNSW graph index (`HNSW{m}[,encoder]`)
//! - [`FlatEncoder`] - Uncompressed vectors
//! - [`SqEncoder`] - Scalar quantization (`SQfp16`, `SQbf16`)
//! - [`HnswPqEncoder`] - Product quantization (`PQ{m}x{code_size}`)
//!
//! ## Example
//!
//! ```rust
//! use knnspec_core::{KnnSettings, MethodComponentContext};
//! use knnspec_faiss::hnsw_method;
//!
//! let method = hnsw_method(&KnnSettings::default()).unwrap();
//! let ctx = MethodComponentContext::new("hnsw")
//!     .with_parameter("m", 32)
//!     .with_parameter("encoder", MethodComponentContext::new("sq"));
//!
//! let values = method.validate(&ctx).unwrap();
//! assert_eq!(method.compile(&values), "HNSW32,SQfp16");
//! ```

pub mod constants;
pub mod encoder;
pub mod hnsw;

pub use encoder::{hnsw_encoders, Encoder, FlatEncoder, HnswPqEncoder, SqEncoder};
pub use hnsw::hnsw_method;
