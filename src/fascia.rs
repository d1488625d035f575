//! Fascia boundary: a rounded rectangle inset 1/32" from the plate,
//! interrupted by a rebate at each fastener.

use crate::emitter::GeometryEmitter;
use crate::float_types::to_millimeters;
use crate::panel::{
    FASCIA_INSET_IN, FASTENER_EDGE_OFFSET_IN, FILLET_RADIUS_IN, OVERSHOOT, Panel, Side,
};
use crate::primitive::{Layer, Primitive};
use nalgebra::Point2;

impl Panel {
    pub(crate) fn emit_fascia(&self, out: &mut impl GeometryEmitter) {
        let (w, t) = (self.width(), self.top());
        let inset = to_millimeters(FASCIA_INSET_IN);
        let r = to_millimeters(FILLET_RADIUS_IN);
        // Corner arc centres sit one fillet radius inside the fascia edge.
        let corner = inset + r;

        // Rounded outline: four corner arcs and the two shared horizontal
        // edges. The vertical edges are stitched per side below.
        out.emit(
            Primitive::arc(Point2::new(corner, corner), r, 180.0, 270.0),
            Layer::Fascia,
        );
        out.emit(
            Primitive::line(Point2::new(corner, inset), Point2::new(w - corner, inset)),
            Layer::Fascia,
        );
        out.emit(
            Primitive::arc(Point2::new(w - corner, corner), r, 270.0, 0.0),
            Layer::Fascia,
        );
        out.emit(
            Primitive::arc(Point2::new(corner, t - corner), r, 90.0, 180.0),
            Layer::Fascia,
        );
        out.emit(
            Primitive::line(
                Point2::new(corner, t - inset),
                Point2::new(w - corner, t - inset),
            ),
            Layer::Fascia,
        );
        out.emit(
            Primitive::arc(Point2::new(w - corner, t - corner), r, 0.0, 90.0),
            Layer::Fascia,
        );

        // Centre reference cross for drafting.
        out.emit(
            self.vertical_construction(w / 2.0),
            Layer::FasciaConstruction,
        );
        out.emit(
            Primitive::line(
                Point2::new(-OVERSHOOT, t / 2.0),
                Point2::new(w + OVERSHOOT, t / 2.0),
            ),
            Layer::FasciaConstruction,
        );

        self.emit_fascia_side(Side::Left, out);
        self.emit_fascia_side(Side::Right, out);
    }

    /// Walks one vertical fascia edge bottom to top, splicing in a rebate
    /// at each fastener row.
    fn emit_fascia_side(&self, side: Side, out: &mut impl GeometryEmitter) {
        let (w, t) = (self.width(), self.top());
        let edge_x = side.x_from_edge(w, to_millimeters(FASCIA_INSET_IN));
        let corner_y = to_millimeters(FASCIA_INSET_IN) + to_millimeters(FILLET_RADIUS_IN);

        if !self.mounts(side).is_empty() {
            let column_x = side.x_from_edge(w, to_millimeters(FASTENER_EDGE_OFFSET_IN));
            out.emit(
                self.vertical_construction(column_x),
                Layer::FasciaConstruction,
            );
        }

        // Start where the bottom corner arc meets this edge; each rebate
        // hands back the point the edge resumes from.
        let mut last = Point2::new(edge_x, corner_y);
        for &position in self.mounts(side) {
            last = self.emit_rebate(side, position, last, out);
        }
        // Straight run up to the top corner arc.
        out.emit(
            Primitive::line(last, Point2::new(edge_x, t - corner_y)),
            Layer::Fascia,
        );
    }
}
