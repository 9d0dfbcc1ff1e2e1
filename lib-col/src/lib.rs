//! The crate for detecting overlaps between the shapes of the playfield.
//! The coordinate system is the screen one:
//! * `X` points right
//! * `Y` points down
//!
//! Only two shapes exist: axis-aligned rectangles ([Aabb]) and circles
//! ([Circle]). Nothing here resolves collisions, it only answers "do these
//! overlap?". Responses are the caller's business.

mod aabb;
mod circle;

pub use aabb::*;
pub use circle::*;
