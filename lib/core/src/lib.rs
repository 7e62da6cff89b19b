//! # knnspec Core
//!
//! Declarative parameter schemas for k-NN index methods.
//!
//! This crate provides the building blocks used to describe a configurable
//! index method and compile a user configuration of it:
//!
//! - [`Parameter`] - A named, typed slot with a default and a validator
//! - [`MethodComponent`] - An immutable, ordered set of parameters
//! - [`MethodComponentContext`] - A user supplied, possibly partial configuration
//! - [`EffectiveValues`] - The fully defaulted output of validation
//! - [`DescriptionTemplate`] - Compiles effective values into a native index description
//! - [`KnnMethod`] - A component plus the spaces it supports
//!
//! ## Example
//!
//! ```rust
//! use knnspec_core::{
//!     DescriptionTemplate, MethodComponent, MethodComponentContext, Parameter,
//! };
//!
//! let flat = MethodComponent::builder("flat").build().unwrap();
//! let hnsw = MethodComponent::builder("hnsw")
//!     .add_parameter(Parameter::integer("m", 16, |v| *v > 0).unwrap())
//!     .add_parameter(
//!         Parameter::method_component_context(
//!             "encoder",
//!             MethodComponentContext::new("flat"),
//!             vec![flat],
//!         )
//!         .unwrap(),
//!     )
//!     .set_map_generator(
//!         DescriptionTemplate::builder("HNSW")
//!             .add_parameter("m", "", "")
//!             .add_parameter("encoder", ",", "")
//!             .build(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let ctx = MethodComponentContext::new("hnsw").with_parameter("m", 32);
//! let values = hnsw.validate(&ctx).unwrap();
//! assert_eq!(hnsw.index_description(&values).as_deref(), Some("HNSW32"));
//! ```

pub mod component;
pub mod context;
pub mod description;
pub mod error;
pub mod method;
pub mod parameter;
pub mod settings;
pub mod space;

pub use component::{MethodComponent, MethodComponentBuilder, INDEX_DESCRIPTION_PARAMETER};
pub use context::{EffectiveValue, EffectiveValues, MethodComponentContext, ParameterValue};
pub use description::{DescribedParameter, DescriptionTemplate, DescriptionTemplateBuilder};
pub use error::{Error, Result, SchemaError, ValidationError};
pub use method::KnnMethod;
pub use parameter::{Parameter, ParameterKind};
pub use settings::KnnSettings;
pub use space::SpaceType;
