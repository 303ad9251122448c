//! # clipper2-rust - 2D polygon Boolean clipping engine
//!
//! A Rust implementation of the Vatti-style sweep-line polygon clipper
//! popularized by Angus Johnson's Clipper2 library: intersection, union,
//! difference and XOR over closed and open paths, with holed and
//! self-intersecting input support.
//!
//! Path offsetting, Minkowski sums, rectangle-clip fast paths and polyline
//! simplification are not part of this crate; it covers the Boolean
//! clipping engine only.

pub mod clipper;
pub mod core;
pub mod engine;
pub mod engine_fns;
pub mod engine_public;
pub mod version;

// Path offsetting (clipper.offset.h), Minkowski sums (clipper.minkowski.h) and
// rectangle-clip fast paths (clipper.rectclip.h) are separate feature areas of
// the historical Clipper2 library and are out of scope for this engine.

// Re-export implemented types and functions only
pub use clipper::*;
pub use core::*;
pub use engine::*;
pub use engine_fns::*;
pub use engine_public::*;
pub use version::*;
