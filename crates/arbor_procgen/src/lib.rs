//! Parametric procedural tree geometry.
//!
//! [`generate`] expands a [`TreeParameters`] recipe and a seed into a stem
//! surface mesh and a leaf card mesh.

pub mod error;
pub mod leaf;
pub mod mesh;
pub mod params;
pub mod radius;
pub mod ring;
pub mod sampler;
pub mod shape;
mod stem;
pub mod tree;

pub use error::*;
pub use leaf::*;
pub use mesh::*;
pub use params::*;
pub use radius::*;
pub use ring::Ring;
pub use sampler::Sampler;
pub use shape::*;
pub use tree::*;
