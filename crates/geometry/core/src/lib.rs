//! Integer 2D vector type for grid and board coordinates.
//!
//! `geometry-core` defines the canonical coordinate value type ([`Vec2i`])
//! shared by grid logic, persistence, and rendering layers. The type is a
//! plain `Copy` value with exactly specified arithmetic: component operations
//! wrap on 32-bit overflow, while derived metrics (dot product, squared
//! length and distance) widen to 64 bits before multiplying. Consumers treat
//! instances as immutable keys usable in both hashed and ordered containers.
pub mod vec2;

pub use vec2::{ParseVec2iError, Vec2i};
