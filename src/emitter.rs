//! Output boundary: where finished primitives go.

use crate::primitive::{Layer, Primitive};

/// Sink for a generated drawing.
///
/// The generator hands each primitive over exactly once, tagged with its
/// layer, and keeps no buffer of its own; the implementor owns the
/// primitive from then on. Emission order is deterministic for a given
/// spec, so sinks may rely on byte-for-byte reproducible streams.
pub trait GeometryEmitter {
    fn emit(&mut self, primitive: Primitive, layer: Layer);
}

/// Buffering sink, mainly for tests and downstream batching.
impl GeometryEmitter for Vec<(Primitive, Layer)> {
    fn emit(&mut self, primitive: Primitive, layer: Layer) {
        self.push((primitive, layer));
    }
}
