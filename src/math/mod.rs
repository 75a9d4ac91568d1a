//! Linear-algebra kernel.
//!
//! [`vector`] and [`matrix`] are the general, size-checked operations;
//! [`vec2`], [`vec3`], [`vec4`] and [`mat4`] are the fixed-size value types
//! the per-vertex and per-pixel stages run on.

pub mod mat4;
pub mod matrix;
pub mod vec2;
pub mod vec3;
pub mod vec4;
pub mod vector;
