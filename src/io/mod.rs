//! Drawing-file sinks.
//!
//! The generator itself is sink-agnostic; everything here just implements
//! [`GeometryEmitter`](crate::emitter::GeometryEmitter) for a concrete file
//! format behind a cargo feature flag.

#[cfg(feature = "dxf-io")]
mod dxf;

#[cfg(feature = "dxf-io")]
pub use dxf::DxfEmitter;
