//! # knnspec
//!
//! Declarative k-NN method schemas and a deterministic index-description
//! compiler for native vector engines.
//!
//! A method such as faiss HNSW is described as a tree of named, typed,
//! validated parameters. A user configuration of that tree is validated,
//! defaulted, and compiled into the exact string the engine's index
//! factory consumes.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install knnspec
//! knnspec compile --method method.json
//! knnspec describe
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use knnspec::prelude::*;
//!
//! let method = hnsw_method(&KnnSettings::default()).unwrap();
//!
//! let ctx = MethodComponentContext::new("hnsw")
//!     .with_parameter("m", 32)
//!     .with_parameter("encoder", MethodComponentContext::new("pq").with_parameter("m", 8));
//!
//! let values = method.validate(&ctx).unwrap();
//! assert_eq!(method.compile(&values), "HNSW32,PQ8x8");
//! ```
//!
//! ## Crate Structure
//!
//! - [`knnspec-core`](https://docs.rs/knnspec-core) - Parameters, components, validation, compilation
//! - [`knnspec-faiss`](https://docs.rs/knnspec-faiss) - Faiss HNSW method and encoders
//!
//! ## Output
//!
//! | Encoder | Description |
//! |---------|-------------|
//! | `flat`  | `HNSW16` |
//! | `sq`    | `HNSW16,SQfp16` |
//! | `pq`    | `HNSW16,PQ1x8` |

pub mod document;

// Re-export core types
pub use knnspec_core::{
    DescriptionTemplate, EffectiveValue, EffectiveValues, Error, KnnMethod, KnnSettings,
    MethodComponent, MethodComponentContext, Parameter, ParameterKind, ParameterValue, Result,
    SchemaError, SpaceType, ValidationError,
};

// Re-export faiss schemas
pub use knnspec_faiss::{hnsw_method, Encoder, FlatEncoder, HnswPqEncoder, SqEncoder};

pub use document::{compile_document, CompiledMethod, MethodDocument};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compile_document, hnsw_method, CompiledMethod, EffectiveValues, Error, KnnMethod,
        KnnSettings, MethodComponent, MethodComponentContext, MethodDocument, Parameter, Result,
        SpaceType, ValidationError,
    };
}
