//! Core numeric types for the STL kernel.
//!
//! Includes vector and matrix aliases (`Vec3`, `Mat4`) and the small set of
//! helpers the triangle and solid layers share.

pub mod mat4;
pub mod vec3;
