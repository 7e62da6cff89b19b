//! Faiss vector encoders
//!
//! An encoder is a named alternative for the `encoder` parameter of a
//! method. Each one exposes its own [`MethodComponent`] schema; the method
//! selects among them by name.

mod flat;
mod pq;
mod sq;

pub use flat::FlatEncoder;
pub use pq::HnswPqEncoder;
pub use sq::SqEncoder;

use knnspec_core::{MethodComponent, SchemaError};

pub trait Encoder: Send + Sync {
    /// Name users select the encoder by
    fn name(&self) -> &'static str;

    fn method_component(&self) -> Result<MethodComponent, SchemaError>;
}

/// Encoders the faiss HNSW method accepts, in registration order
pub fn hnsw_encoders() -> Vec<Box<dyn Encoder>> {
    vec![
        Box::new(FlatEncoder),
        Box::new(SqEncoder),
        Box::new(HnswPqEncoder),
    ]
}
